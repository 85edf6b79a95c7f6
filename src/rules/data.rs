// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*! # Tablas de requisitos por defecto

Default rule tables for the DOE reference buildings and ASHRAE 90.1-2004 to 90.1-2013.
*/

/// Default rule tables
pub const RULES_901: &str = "
#META SOURCE: ASHRAE 90.1-2004, 90.1-2007, 90.1-2010, 90.1-2013 and DOE reference buildings
#META UNITS: Btu/h, cfm, ft2, F, Btu/lb, hp

# ECONOMIZER_REQUIRED, templates, climate zones, minimum cooling capacity [Btu/h]
ECONOMIZER_REQUIRED, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1A|1B|2A|3A|4A, -
ECONOMIZER_REQUIRED, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 2B|5A|6A|7A|7B|8A|8B, 35000
ECONOMIZER_REQUIRED, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 3B|3C|4B|4C|5B|5C|6B, 65000
ECONOMIZER_REQUIRED, 90.1-2010|90.1-2013, 1A|1B, -
ECONOMIZER_REQUIRED, 90.1-2010|90.1-2013, *, 54000

# ECONOMIZER_LIMITS, templates, climate zones, economizer types, dry bulb [F], enthalpy [Btu/lb], dew point [F]
ECONOMIZER_LIMITS, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1B|2B|3B|3C|4B|4C|5B|5C|6B|7B|8A|8B, FixedDryBulb, 75, -, -
ECONOMIZER_LIMITS, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 5A|6A|7A, FixedDryBulb, 70, -, -
ECONOMIZER_LIMITS, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1A|2A|3A|4A, FixedDryBulb, 65, -, -
ECONOMIZER_LIMITS, 90.1-2010|90.1-2013, 1B|2B|3B|3C|4B|4C|5B|5C|6B|7A|7B|8A|8B, FixedDryBulb, 75, -, -
ECONOMIZER_LIMITS, 90.1-2010|90.1-2013, 5A|6A, FixedDryBulb, 70, -, -
ECONOMIZER_LIMITS, *, *, FixedEnthalpy, -, 28, -
ECONOMIZER_LIMITS, *, *, FixedDewPointAndDryBulb, 75, -, 55

# ECONOMIZER_INTEGRATION, templates, climate zones, integrated, small DX exception [Btu/h], multizone VAV exception
ECONOMIZER_INTEGRATION, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1A|1B|2A|2B|3A|4A|5A|5B|6A|6B|7A|7B|8A|8B, no, 65000, yes
ECONOMIZER_INTEGRATION, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 3B|3C|4B|4C|5C, yes, 65000, yes
ECONOMIZER_INTEGRATION, 90.1-2010|90.1-2013, *, yes, -, no

# ECONOMIZER_PROHIBITED, templates, climate zones, prohibited economizer types
ECONOMIZER_PROHIBITED, *, 1B|2B|3B|3C|4B|4C|5B|6B|7A|7B|8A|8B, FixedEnthalpy
ECONOMIZER_PROHIBITED, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1A|2A|3A|4A, DifferentialDryBulb
ECONOMIZER_PROHIBITED, 90.1-2010|90.1-2013, 1A|2A|3A|4A, FixedDryBulb|DifferentialDryBulb
ECONOMIZER_PROHIBITED, *, 5A|6A|5C, -

# ERV, templates, climate zones, OA fraction from, OA fraction to, design supply flow threshold [cfm]
ERV, DOE Ref Pre-1980|DOE Ref 1980-2004, *, 0, inf, -
ERV, 90.1-2004|90.1-2007, *, 0, 0.7, -
ERV, 90.1-2004|90.1-2007, *, 0.7, inf, 5000
# Table 6.5.6.1 (90.1-2010)
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0, 0.3, -
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.3, 0.4, -
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.4, 0.5, -
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.5, 0.6, -
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.6, 0.7, -
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.7, 0.8, 5000
ERV, 90.1-2010, 3B|3C|4B|4C|5B, 0.8, inf, 5000
ERV, 90.1-2010, 1B|2B|5C, 0, 0.3, -
ERV, 90.1-2010, 1B|2B|5C, 0.3, 0.4, -
ERV, 90.1-2010, 1B|2B|5C, 0.4, 0.5, -
ERV, 90.1-2010, 1B|2B|5C, 0.5, 0.6, 26000
ERV, 90.1-2010, 1B|2B|5C, 0.6, 0.7, 12000
ERV, 90.1-2010, 1B|2B|5C, 0.7, 0.8, 5000
ERV, 90.1-2010, 1B|2B|5C, 0.8, inf, 4000
ERV, 90.1-2010, 6B, 0, 0.3, -
ERV, 90.1-2010, 6B, 0.3, 0.4, 11000
ERV, 90.1-2010, 6B, 0.4, 0.5, 5500
ERV, 90.1-2010, 6B, 0.5, 0.6, 4500
ERV, 90.1-2010, 6B, 0.6, 0.7, 3500
ERV, 90.1-2010, 6B, 0.7, 0.8, 2500
ERV, 90.1-2010, 6B, 0.8, inf, 1500
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0, 0.3, -
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.3, 0.4, 5500
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.4, 0.5, 4500
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.5, 0.6, 3500
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.6, 0.7, 2000
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.7, 0.8, 1000
ERV, 90.1-2010, 1A|2A|3A|4A|5A|6A, 0.8, inf, 0
ERV, 90.1-2010, 7A|7B|8A|8B, 0, 0.3, -
ERV, 90.1-2010, 7A|7B|8A|8B, 0.3, 0.4, 2500
ERV, 90.1-2010, 7A|7B|8A|8B, 0.4, 0.5, 1000
ERV, 90.1-2010, 7A|7B|8A|8B, 0.5, 0.6, 0
ERV, 90.1-2010, 7A|7B|8A|8B, 0.6, 0.7, 0
ERV, 90.1-2010, 7A|7B|8A|8B, 0.7, 0.8, 0
ERV, 90.1-2010, 7A|7B|8A|8B, 0.8, inf, 0
# Table 6.5.6.1-2 (90.1-2013)
ERV, 90.1-2013, 3C, 0, inf, -
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0, 0.1, -
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.1, 0.2, -
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.2, 0.3, 19500
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.3, 0.4, 9000
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.4, 0.5, 5000
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.5, 0.6, 4000
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.6, 0.7, 3000
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.7, 0.8, 1500
ERV, 90.1-2013, 1B|2B|3B|4C|5C, 0.8, inf, 0
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0, 0.1, -
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0.1, 0.2, 2500
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0.2, 0.3, 2000
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0.3, 0.4, 1000
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0.4, 0.5, 500
ERV, 90.1-2013, 1A|2A|3A|4B|5B, 0.5, inf, 0
ERV, 90.1-2013, 4A|5A|6A|6B|7A|7B|8A|8B, 0, 0.1, -
ERV, 90.1-2013, 4A|5A|6A|6B|7A|7B|8A|8B, 0.1, inf, 0

# DCV, templates, min area [ft2], min occupants per 1000 ft2, min OA without economizer [cfm], min OA with economizer [cfm]
DCV, DOE Ref Pre-1980|DOE Ref 1980-2004, -, -, -, -
DCV, 90.1-2004, 0, 100, 3000, 0
DCV, 90.1-2007|90.1-2010, 500, 40, 3000, 1200
DCV, 90.1-2013, 500, 25, 3000, 750

# MULTIZONE_OPT, templates, required, max OA fraction
MULTIZONE_OPT, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, no, -
MULTIZONE_OPT, 90.1-2010|90.1-2013, yes, 0.7

# FAN_POWER, templates, CV [bhp/cfm], VAV [bhp/cfm], single zone VAV uses CV limit, baseline impeller efficiency
FAN_POWER, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 0.0013, 0.00094, no, 0.65
FAN_POWER, 90.1-2010|90.1-2013, 0.0013, 0.00094, yes, 0.65

# MOTOR, templates, from [hp], to [hp], nominal full load efficiency (4 pole, open drip-proof)
# EPAct
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 0, 1, 0.825
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1, 1.5, 0.840
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 1.5, 2, 0.840
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 2, 3, 0.865
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 3, 5, 0.875
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 5, 7.5, 0.885
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 7.5, 10, 0.895
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 10, 15, 0.910
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 15, 20, 0.910
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 20, 25, 0.917
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 25, 30, 0.924
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 30, 40, 0.930
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 40, 50, 0.930
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 50, 60, 0.936
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 60, 75, 0.941
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 75, 100, 0.941
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 100, 125, 0.945
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 125, 150, 0.950
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 150, 200, 0.950
MOTOR, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, 200, inf, 0.950
# NEMA Premium
MOTOR, 90.1-2010|90.1-2013, 0, 1, 0.855
MOTOR, 90.1-2010|90.1-2013, 1, 1.5, 0.865
MOTOR, 90.1-2010|90.1-2013, 1.5, 2, 0.865
MOTOR, 90.1-2010|90.1-2013, 2, 3, 0.895
MOTOR, 90.1-2010|90.1-2013, 3, 5, 0.895
MOTOR, 90.1-2010|90.1-2013, 5, 7.5, 0.910
MOTOR, 90.1-2010|90.1-2013, 7.5, 10, 0.917
MOTOR, 90.1-2010|90.1-2013, 10, 15, 0.930
MOTOR, 90.1-2010|90.1-2013, 15, 20, 0.930
MOTOR, 90.1-2010|90.1-2013, 20, 25, 0.936
MOTOR, 90.1-2010|90.1-2013, 25, 30, 0.941
MOTOR, 90.1-2010|90.1-2013, 30, 40, 0.941
MOTOR, 90.1-2010|90.1-2013, 40, 50, 0.945
MOTOR, 90.1-2010|90.1-2013, 50, 60, 0.950
MOTOR, 90.1-2010|90.1-2013, 60, 75, 0.950
MOTOR, 90.1-2010|90.1-2013, 75, 100, 0.954
MOTOR, 90.1-2010|90.1-2013, 100, 125, 0.954
MOTOR, 90.1-2010|90.1-2013, 125, 150, 0.958
MOTOR, 90.1-2010|90.1-2013, 150, 200, 0.958
MOTOR, 90.1-2010|90.1-2013, 200, inf, 0.958

# UNITARY_AC, templates, heating types, capacity [Btu/h], rating, curves (cap-fT|cap-fFF|EIR-fT|EIR-fFF|PLF-fPLR)
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, *, 0-65000, SEER 9.7, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, Electric Resistance or None, 65000-135000, EER 10.3, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, All Other, 65000-135000, EER 10.1, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, Electric Resistance or None, 135000-240000, EER 9.7, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, All Other, 135000-240000, EER 9.5, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, Electric Resistance or None, 240000-760000, EER 9.5, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, All Other, 240000-760000, EER 9.3, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, Electric Resistance or None, 760000-inf, EER 9.2, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, DOE Ref Pre-1980|DOE Ref 1980-2004|90.1-2004|90.1-2007, All Other, 760000-inf, EER 9.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, *, 0-65000, SEER 13.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, Electric Resistance or None, 65000-135000, EER 11.2, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, All Other, 65000-135000, EER 11.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, Electric Resistance or None, 135000-240000, EER 11.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, All Other, 135000-240000, EER 10.8, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, Electric Resistance or None, 240000-760000, EER 10.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, All Other, 240000-760000, EER 9.8, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, Electric Resistance or None, 760000-inf, EER 9.7, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2010, All Other, 760000-inf, EER 9.5, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, *, 0-65000, SEER 14.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, Electric Resistance or None, 65000-135000, EER 11.2, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, All Other, 65000-135000, EER 11.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, Electric Resistance or None, 135000-240000, EER 11.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, All Other, 135000-240000, EER 10.8, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, Electric Resistance or None, 240000-760000, EER 10.0, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, All Other, 240000-760000, EER 9.8, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, Electric Resistance or None, 760000-inf, EER 9.7, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
UNITARY_AC, 90.1-2013, All Other, 760000-inf, EER 9.5, DOE Ref DX Clg Coil Cool-Cap-fT|DOE Ref DX Clg Coil Cool-Cap-fFF|DOE Ref DX Clg Coil Cool-EIR-fT|DOE Ref DX Clg Coil Cool-EIR-fFF|DOE Ref DX Clg Coil Cool-PLF-fPLR
";

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

// -----------------------------------------------------------------------------------
// Unit conversions
// -----------------------------------------------------------------------------------

// Model values are SI, rule tables use the IP units of the standard.

/// cfm in one m3/s
pub const CFM_PER_M3_PER_S: f64 = 2118.880;
/// W in one Btu/h
pub const W_PER_BTU_PER_HR: f64 = 0.293_071;
/// Pa in one inch of water column
pub const PA_PER_IN_H2O: f64 = 249.089;
/// ft2 in one m2
pub const FT2_PER_M2: f64 = 10.763_910;
/// J/kg in one Btu/lb
pub const J_PER_KG_PER_BTU_PER_LB: f64 = 2326.0;
/// W in one hp
pub const W_PER_HP: f64 = 746.0;
/// in w.c. · cfm per brake horsepower (fan law constant)
pub const FAN_BHP_CONSTANT: f64 = 6356.0;
/// in w.c. · cfm per brake horsepower used for pressure drop credits (Table 6.5.3.1.1B)
pub const PRESSURE_CREDIT_CONSTANT: f64 = 4131.0;

pub fn m3_per_s_to_cfm(v: f64) -> f64 {
    v * CFM_PER_M3_PER_S
}

pub fn cfm_to_m3_per_s(v: f64) -> f64 {
    v / CFM_PER_M3_PER_S
}

pub fn btu_per_hr_to_w(v: f64) -> f64 {
    v * W_PER_BTU_PER_HR
}

pub fn w_to_btu_per_hr(v: f64) -> f64 {
    v / W_PER_BTU_PER_HR
}

pub fn f_to_c(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0
}

pub fn btu_per_lb_to_j_per_kg(v: f64) -> f64 {
    v * J_PER_KG_PER_BTU_PER_LB
}

pub fn pa_to_in_h2o(v: f64) -> f64 {
    v / PA_PER_IN_H2O
}

pub fn m2_to_ft2(v: f64) -> f64 {
    v * FT2_PER_M2
}

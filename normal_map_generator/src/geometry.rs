use glam::DVec3;

use crate::params::{BevelParams, PANEL_EXTENT};

/// The eleven reference points of the bevelled panel, laid out on the
/// 10x10 panel grid (y grows upward in this sketch):
///
/// ```text
/// 9 i * * * * h
/// 8 * j * * k *
///   * * * * * *
/// 2 c d * * e *
/// 1 a b * * f g
///   1 2     8 9
/// ```
///
/// `d`, `e`, `j`, `k` form the inner ring, the rest the outer one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelPoints {
    pub a: DVec3,
    pub b: DVec3,
    pub c: DVec3,
    pub d: DVec3,
    pub e: DVec3,
    pub f: DVec3,
    pub g: DVec3,
    pub h: DVec3,
    pub i: DVec3,
    pub j: DVec3,
    pub k: DVec3,
}

impl PanelPoints {
    pub fn new(params: &BevelParams) -> Self {
        let BevelParams { d1, d2, .. } = *params;

        // x axis
        let x_aci = d1;
        let x_bdj = d2;
        let x_fek = PANEL_EXTENT - d1 - d2;
        let x_gh = PANEL_EXTENT - d1;

        // y axis
        let y_abfg = d1;
        let y_cde = d1 + d2;
        let y_jk = PANEL_EXTENT - d1 - d2;
        let y_ih = PANEL_EXTENT - d1;

        let (inner, outer) = params.z_dir.heights();

        Self {
            a: DVec3::new(x_aci, y_abfg, outer),
            b: DVec3::new(x_bdj, y_abfg, outer),
            c: DVec3::new(x_aci, y_cde, outer),
            d: DVec3::new(x_bdj, y_cde, inner),
            e: DVec3::new(x_fek, y_cde, inner),
            f: DVec3::new(x_fek, y_abfg, outer),
            g: DVec3::new(x_gh, y_abfg, outer),
            h: DVec3::new(x_gh, y_ih, outer),
            i: DVec3::new(x_aci, y_ih, outer),
            j: DVec3::new(x_bdj, y_jk, inner),
            k: DVec3::new(x_fek, y_jk, inner),
        }
    }

    pub fn as_array(&self) -> [DVec3; 11] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.i, self.j, self.k,
        ]
    }
}

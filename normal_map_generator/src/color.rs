use glam::DVec3;
use image::Rgb;

/// Normal pointing straight out of the screen.
pub const FLAT: DVec3 = DVec3::Z;

/// Maps each component from `[-1, 1]` onto `[0, 255]`, rounding down.
pub fn normal_to_color(n: DVec3) -> Rgb<u8> {
    let channel = |c: f64| ((c + 1.0) * 255.0 / 2.0).floor().max(0.0).min(255.0) as u8;
    Rgb([channel(n.x), channel(n.y), channel(n.z)])
}

/// Inverse of [`normal_to_color`], renormalized.
pub fn color_to_normal(color: Rgb<u8>) -> DVec3 {
    let [r, g, b] = color.0;
    let component = |c: u8| f64::from(c) * 2.0 / 255.0 - 1.0;
    DVec3::new(component(r), component(g), component(b)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PanelPoints;
    use crate::normals::{Face, FaceNormals};
    use crate::params::{BevelParams, ZDir};
    use approx::assert_abs_diff_eq;

    #[test]
    fn flat_is_mid_blue() {
        assert_eq!(normal_to_color(FLAT), Rgb([127, 127, 255]));
    }

    #[test]
    fn extremes() {
        assert_eq!(normal_to_color(DVec3::new(-1.0, 1.0, 0.0)), Rgb([0, 255, 127]));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(normal_to_color(DVec3::new(-3.0, 2.5, 1.0001)), Rgb([0, 255, 255]));
    }

    #[test]
    fn default_down_color() {
        let points = PanelPoints::new(&BevelParams::default());
        let normals = FaceNormals::new(&points).unwrap();
        assert_eq!(normal_to_color(normals.get(Face::Down)), Rgb([127, 241, 184]));
    }

    #[test]
    fn decode_recovers_normals() {
        for &z_dir in &[ZDir::Down, ZDir::Up] {
            let params = BevelParams {
                d1: 1.0,
                d2: 2.0,
                z_dir,
                ..Default::default()
            };
            let normals = FaceNormals::new(&PanelPoints::new(&params)).unwrap();

            for &face in Face::ALL.iter() {
                let n = normals.get(face);
                let back = color_to_normal(normal_to_color(n));
                assert_abs_diff_eq!(back.x, n.x, epsilon = 0.02);
                assert_abs_diff_eq!(back.y, n.y, epsilon = 0.02);
                assert_abs_diff_eq!(back.z, n.z, epsilon = 0.02);
            }
        }
    }
}

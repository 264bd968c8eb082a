use glam::DVec3;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::bands::{Bands, Region};
use crate::color::{normal_to_color, FLAT};
use crate::error::Result;
use crate::geometry::PanelPoints;
use crate::normals::{Face, FaceNormals};
use crate::params::BevelParams;

/// Colour of pixels no pass has reached yet.
pub const BLANK: Rgb<u8> = Rgb([255, 255, 255]);

/// Points in the pipeline where the canvas is handed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Checkpoint {
    Flat,
    Bevels,
    Corners,
}

impl Checkpoint {
    pub fn is_final(self) -> bool {
        self == Checkpoint::Corners
    }
}

/// Everything derived from a validated set of parameters.
#[derive(Copy, Clone, Debug)]
pub struct Generator {
    pub params: BevelParams,
    pub points: PanelPoints,
    pub normals: FaceNormals,
    pub bands: Bands,
}

impl Generator {
    pub fn new(params: BevelParams) -> Result<Self> {
        params.validate()?;

        let points = PanelPoints::new(&params);
        log::debug!("points: {:?}", points.as_array());

        let normals = FaceNormals::new(&points)?;
        for &face in Face::ALL.iter() {
            log::debug!("{:?} normal: {:?}", face, normals.get(face));
        }

        let bands = Bands::new(&params);
        log::debug!("bands: {:?}", bands.r);

        Ok(Self {
            params,
            points,
            normals,
            bands,
        })
    }

    /// Paints the three passes onto a fresh canvas, calling `checkpoint`
    /// after each one, and returns the finished image.
    pub fn run<F>(&self, mut checkpoint: F) -> Result<RgbImage>
    where
        F: FnMut(Checkpoint, &RgbImage) -> Result<()>,
    {
        let size = self.params.size;
        let mut img = ImageBuffer::from_pixel(size, size, BLANK);

        self.paint_flat(&mut img);
        checkpoint(Checkpoint::Flat, &img)?;

        self.paint_bevels(&mut img);
        checkpoint(Checkpoint::Bevels, &img)?;

        self.paint_corners(&mut img);
        checkpoint(Checkpoint::Corners, &img)?;

        Ok(img)
    }

    pub fn render(&self) -> Result<RgbImage> {
        self.run(|_, _| Ok(()))
    }

    fn paint_flat(&self, img: &mut RgbImage) {
        for region in self.bands.flat_regions().iter() {
            fill(img, region, FLAT, FLAT);
        }
    }

    fn paint_bevels(&self, img: &mut RgbImage) {
        for (face, region) in self.bands.bevel_regions().iter() {
            let n = self.normals.get(*face);
            fill(img, region, n, n);
        }
    }

    fn paint_corners(&self, img: &mut RgbImage) {
        for (region, corner) in self.bands.corner_regions().iter() {
            log::trace!("painting {} corner", corner.name);
            fill(
                img,
                region,
                self.normals.get(corner.below),
                self.normals.get(corner.above),
            );
        }
    }
}

fn fill(img: &mut RgbImage, region: &Region, below: DVec3, above: DVec3) {
    if region.is_empty() {
        log::trace!("skipping empty region {:?}", region);
        return;
    }
    log::trace!("filling {} pixels", region.pixel_count());

    let (below, above) = (normal_to_color(below), normal_to_color(above));
    for (x, y, is_below) in region.pixels() {
        img.put_pixel(x, y, if is_below { below } else { above });
    }
}

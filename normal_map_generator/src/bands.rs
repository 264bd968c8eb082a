use std::ops::Range;

use crate::normals::Face;
use crate::params::{BevelParams, PANEL_EXTENT};

/// Half-open pixel interval `[low, high)` along one image axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Band {
    pub low: u32,
    pub high: u32,
}

impl Band {
    /// Scales a `[from, to)` span on the 0..10 panel grid to pixels.
    pub fn scaled(from: f64, to: f64, size: u32) -> Self {
        let to_pixels = |v: f64| (v * f64::from(size) / PANEL_EXTENT).floor().max(0.0) as u32;
        Self {
            low: to_pixels(from),
            high: to_pixels(to),
        }
    }

    pub fn len(&self) -> u32 {
        self.high.saturating_sub(self.low)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<u32> {
        self.low..self.high
    }
}

/// The six bands R0..R5. R0..R4 tile `[0, size)` in order, R5 is the whole
/// extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bands {
    pub size: u32,
    pub r: [Band; 6],
}

impl Bands {
    pub fn new(params: &BevelParams) -> Self {
        let BevelParams { d1, d2, size, .. } = *params;
        let spans = [
            (0.0, d1),
            (d1, d1 + d2),
            (d1 + d2, PANEL_EXTENT - d1 - d2),
            (PANEL_EXTENT - d1 - d2, PANEL_EXTENT - d1),
            (PANEL_EXTENT - d1, PANEL_EXTENT),
            (0.0, PANEL_EXTENT),
        ];

        let mut r = [Band { low: 0, high: 0 }; 6];
        for (band, &(from, to)) in r.iter_mut().zip(spans.iter()) {
            *band = Band::scaled(from, to, size);
        }

        Self { size, r }
    }

    /// Flat regions: the outer frame plus the central top.
    pub fn flat_regions(&self) -> [Region; 5] {
        let r = &self.r;
        [
            Region::rect(r[0], r[5]),
            Region::rect(r[4], r[5]),
            Region::rect(r[5], r[0]),
            Region::rect(r[5], r[4]),
            Region::rect(r[2], r[2]),
        ]
    }

    /// The rectangular part of each bevel face.
    pub fn bevel_regions(&self) -> [(Face, Region); 4] {
        let r = &self.r;
        [
            (Face::Down, Region::rect(r[1], r[2])),
            (Face::Right, Region::rect(r[3], r[2])),
            (Face::Up, Region::rect(r[2], r[3])),
            (Face::Left, Region::rect(r[2], r[1])),
        ]
    }

    pub fn corner_regions(&self) -> [(Region, Corner); 4] {
        let mut out = [(Region::rect(self.r[0], self.r[0]), CORNERS[0]); 4];
        for (slot, corner) in out.iter_mut().zip(CORNERS.iter()) {
            let (bx, by) = corner.bands;
            *slot = (
                Region::Split {
                    x: self.r[bx],
                    y: self.r[by],
                    diagonal: corner.diagonal,
                    size: self.size,
                },
                *corner,
            );
        }
        out
    }
}

/// Line splitting a corner square into two triangles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// `x < y` falls below the line.
    Main,
    /// `y < size - x` falls below the line.
    Anti,
}

impl Diagonal {
    pub fn below(self, x: u32, y: u32, size: u32) -> bool {
        match self {
            Diagonal::Main => x < y,
            Diagonal::Anti => u64::from(y) + u64::from(x) < u64::from(size),
        }
    }
}

/// A corner square: which bands it spans, how it is split, and the faces on
/// either side of the split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Corner {
    pub name: &'static str,
    pub bands: (usize, usize),
    pub diagonal: Diagonal,
    pub below: Face,
    pub above: Face,
}

pub const CORNERS: [Corner; 4] = [
    Corner {
        name: "top-left",
        bands: (1, 1),
        diagonal: Diagonal::Main,
        below: Face::Down,
        above: Face::Left,
    },
    Corner {
        name: "bottom-right",
        bands: (3, 3),
        diagonal: Diagonal::Main,
        below: Face::Up,
        above: Face::Right,
    },
    Corner {
        name: "bottom-left",
        bands: (3, 1),
        diagonal: Diagonal::Anti,
        below: Face::Left,
        above: Face::Right,
    },
    Corner {
        name: "top-right",
        bands: (1, 3),
        diagonal: Diagonal::Anti,
        below: Face::Down,
        above: Face::Up,
    },
];

/// A set of pixels, iterated column by column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Rect {
        x: Band,
        y: Band,
    },
    /// Corner square whose pixels are tagged with which side of `diagonal`
    /// they fall on.
    Split {
        x: Band,
        y: Band,
        diagonal: Diagonal,
        size: u32,
    },
}

impl Region {
    pub fn rect(x: Band, y: Band) -> Self {
        Region::Rect { x, y }
    }

    fn bands(&self) -> (Band, Band) {
        match *self {
            Region::Rect { x, y } | Region::Split { x, y, .. } => (x, y),
        }
    }

    pub fn is_empty(&self) -> bool {
        let (x, y) = self.bands();
        x.is_empty() || y.is_empty()
    }

    pub fn pixel_count(&self) -> u64 {
        let (x, y) = self.bands();
        u64::from(x.len()) * u64::from(y.len())
    }

    /// Every pixel of the region, with `true` when it lies below the split.
    /// Rectangles report every pixel as below.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, bool)> {
        let region = *self;
        let (xs, ys) = region.bands();
        xs.range().flat_map(move |x| {
            ys.range().map(move |y| {
                let below = match region {
                    Region::Rect { .. } => true,
                    Region::Split { diagonal, size, .. } => diagonal.below(x, y, size),
                };
                (x, y, below)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(d1: f64, d2: f64, size: u32) -> Bands {
        Bands::new(&BevelParams {
            d1,
            d2,
            size,
            ..Default::default()
        })
    }

    #[test]
    fn default_bounds() {
        let b = bands(0.5, 0.5, 512);
        let bounds: Vec<_> = b.r.iter().map(|r| (r.low, r.high)).collect();
        assert_eq!(
            bounds,
            vec![(0, 25), (25, 51), (51, 460), (460, 486), (486, 512), (0, 512)]
        );
    }

    #[test]
    fn bands_tile_the_image() {
        for &(d1, d2) in &[(0.5, 0.5), (1.0, 2.0), (0.1, 4.8), (3.3, 0.7), (0.01, 0.02)] {
            for &size in &[1, 7, 64, 100, 333, 512, 1024] {
                let b = bands(d1, d2, size);
                assert_eq!(b.r[0].low, 0);
                for w in b.r[..5].windows(2) {
                    assert_eq!(w[0].high, w[1].low, "d1={} d2={} size={}", d1, d2, size);
                    assert!(w[0].low <= w[0].high);
                }
                assert_eq!(b.r[4].high, size);
                let total: u32 = b.r[..5].iter().map(Band::len).sum();
                assert_eq!(total, size);
                assert_eq!(b.r[5], Band { low: 0, high: size });
            }
        }
    }

    #[test]
    fn regions_cover_every_pixel_once() {
        let b = bands(1.0, 1.5, 40);
        let mut hits = vec![0u8; 40 * 40];

        let mut regions: Vec<Region> = vec![b.flat_regions()[4]];
        regions.extend(b.bevel_regions().iter().map(|(_, r)| *r));
        regions.extend(b.corner_regions().iter().map(|(r, _)| *r));
        // The frame rectangles overlap each other at the outer corners.
        let frame = [b.r[0], b.r[4]];
        for (x, y, _) in Region::rect(b.r[5], b.r[5]).pixels() {
            if frame
                .iter()
                .any(|f| f.range().contains(&x) || f.range().contains(&y))
            {
                hits[(y * 40 + x) as usize] += 1;
            }
        }

        for region in &regions {
            for (x, y, _) in region.pixels() {
                hits[(y * 40 + x) as usize] += 1;
            }
        }

        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn corner_split_is_strict() {
        let b = bands(0.5, 0.5, 512);
        let (top_left, corner) = b.corner_regions()[0];
        assert_eq!(corner.name, "top-left");

        let on_diagonal: Vec<_> = top_left.pixels().filter(|&(x, y, _)| x == y).collect();
        assert_eq!(on_diagonal.len(), 26);
        assert!(on_diagonal.iter().all(|&(_, _, below)| !below));

        assert!(Diagonal::Anti.below(10, 501, 512));
        assert!(!Diagonal::Anti.below(11, 501, 512));
    }

    #[test]
    fn corner_table_pairs() {
        let pairs: Vec<_> = CORNERS
            .iter()
            .map(|c| (c.bands, c.below, c.above))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ((1, 1), Face::Down, Face::Left),
                ((3, 3), Face::Up, Face::Right),
                ((3, 1), Face::Left, Face::Right),
                ((1, 3), Face::Down, Face::Up),
            ]
        );
    }

    #[test]
    fn pixel_count_matches_iteration() {
        let b = bands(0.5, 0.5, 100);
        for (_, region) in b.bevel_regions().iter() {
            assert_eq!(region.pixels().count() as u64, region.pixel_count());
        }

        // One pixel wide image: everything but the last band rounds to nothing.
        let tiny = bands(0.5, 0.5, 1);
        assert!(tiny.r[..4].iter().all(Band::is_empty));
        assert!(tiny.bevel_regions().iter().all(|(_, r)| r.is_empty()));
        assert!(!Region::rect(tiny.r[4], tiny.r[5]).is_empty());
    }
}

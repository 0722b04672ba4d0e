// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space × time boxes, the bounding box of temporal points.

use kurbo::Rect;

use crate::error::BoxError;
use crate::span::{Span, TstzSpan};
use crate::time::Timestamp;

bitflags::bitflags! {
    /// Dimensions and coordinate flavor of an [`STBox`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct STBoxFlags: u8 {
        /// The x/y extent is present.
        const HAS_X    = 0b0000_0001;
        /// The z extent is present.
        const HAS_Z    = 0b0000_0010;
        /// The time span is present.
        const HAS_T    = 0b0000_0100;
        /// Coordinates are geodetic (lon/lat on the sphere).
        const GEODETIC = 0b0000_1000;
    }
}

/// A box over x/y (and optionally z) coordinates and a time span.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct STBox {
    flags: STBoxFlags,
    srid: i32,
    xy: Rect,
    zmin: f64,
    zmax: f64,
    period: TstzSpan,
}

const NO_PERIOD: TstzSpan = Span::new_unchecked(Timestamp::EPOCH, Timestamp::EPOCH, true, true);

fn check_axis(min: f64, max: f64) -> Result<(), BoxError> {
    if min.is_nan() || max.is_nan() {
        return Err(BoxError::NotANumber);
    }
    if min > max {
        return Err(BoxError::InvertedBounds);
    }
    Ok(())
}

impl STBox {
    fn spatial(
        flags: STBoxFlags,
        xy: (f64, f64, f64, f64),
        z: (f64, f64),
        period: TstzSpan,
    ) -> Result<Self, BoxError> {
        let (xmin, ymin, xmax, ymax) = xy;
        check_axis(xmin, xmax)?;
        check_axis(ymin, ymax)?;
        check_axis(z.0, z.1)?;
        Ok(Self {
            flags,
            srid: 0,
            xy: Rect::new(xmin, ymin, xmax, ymax),
            zmin: z.0,
            zmax: z.1,
            period,
        })
    }

    /// Planar box without time.
    pub fn xy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, BoxError> {
        Self::spatial(
            STBoxFlags::HAS_X,
            (xmin, ymin, xmax, ymax),
            (0.0, 0.0),
            NO_PERIOD,
        )
    }

    /// 3D box without time.
    pub fn xyz(
        xmin: f64,
        ymin: f64,
        zmin: f64,
        xmax: f64,
        ymax: f64,
        zmax: f64,
    ) -> Result<Self, BoxError> {
        Self::spatial(
            STBoxFlags::HAS_X | STBoxFlags::HAS_Z,
            (xmin, ymin, xmax, ymax),
            (zmin, zmax),
            NO_PERIOD,
        )
    }

    /// Planar box with a period.
    pub fn xyt(
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        period: TstzSpan,
    ) -> Result<Self, BoxError> {
        Self::spatial(
            STBoxFlags::HAS_X | STBoxFlags::HAS_T,
            (xmin, ymin, xmax, ymax),
            (0.0, 0.0),
            period,
        )
    }

    /// 3D box with a period.
    pub fn xyzt(
        xmin: f64,
        ymin: f64,
        zmin: f64,
        xmax: f64,
        ymax: f64,
        zmax: f64,
        period: TstzSpan,
    ) -> Result<Self, BoxError> {
        Self::spatial(
            STBoxFlags::all() - STBoxFlags::GEODETIC,
            (xmin, ymin, xmax, ymax),
            (zmin, zmax),
            period,
        )
    }

    /// Box with only a period.
    pub const fn from_period(period: TstzSpan) -> Self {
        Self {
            flags: STBoxFlags::HAS_T,
            srid: 0,
            xy: Rect::ZERO,
            zmin: 0.0,
            zmax: 0.0,
            period,
        }
    }

    /// Tag the spatial extent with a spatial reference id.
    #[must_use]
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// Mark the coordinates as geodetic.
    #[must_use]
    pub fn into_geodetic(mut self) -> Self {
        self.flags |= STBoxFlags::GEODETIC;
        self
    }

    /// Dimensions and coordinate flavor.
    pub fn flags(&self) -> STBoxFlags {
        self.flags
    }

    /// Whether the box carries a z extent.
    pub fn has_z(&self) -> bool {
        self.flags.contains(STBoxFlags::HAS_Z)
    }

    /// Spatial reference id of the x/y/z extent (0 when unknown).
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// The x/y extent, if present.
    pub fn rect(&self) -> Option<Rect> {
        self.flags.contains(STBoxFlags::HAS_X).then_some(self.xy)
    }

    /// The z extent as `(zmin, zmax)`, if present.
    pub fn z(&self) -> Option<(f64, f64)> {
        self.has_z().then_some((self.zmin, self.zmax))
    }

    /// The period, if present.
    pub fn period(&self) -> Option<&TstzSpan> {
        self.flags.contains(STBoxFlags::HAS_T).then_some(&self.period)
    }

    /// Lower x coordinate; zero when the box has no spatial extent.
    pub fn xmin(&self) -> f64 {
        self.xy.x0
    }

    /// Upper x coordinate; zero when the box has no spatial extent.
    pub fn xmax(&self) -> f64 {
        self.xy.x1
    }

    /// Lower y coordinate; zero when the box has no spatial extent.
    pub fn ymin(&self) -> f64 {
        self.xy.y0
    }

    /// Upper y coordinate; zero when the box has no spatial extent.
    pub fn ymax(&self) -> f64 {
        self.xy.y1
    }

    /// Lower z coordinate; zero when the box has no z extent.
    pub fn zmin(&self) -> f64 {
        self.zmin
    }

    /// Upper z coordinate; zero when the box has no z extent.
    pub fn zmax(&self) -> f64 {
        self.zmax
    }

    /// Dimensions shared by both boxes, or `None` when they cannot be compared.
    fn common(&self, other: &Self) -> Option<STBoxFlags> {
        let common = self.flags & other.flags & (STBoxFlags::all() - STBoxFlags::GEODETIC);
        if !common.intersects(STBoxFlags::HAS_X | STBoxFlags::HAS_T) {
            return None;
        }
        if common.contains(STBoxFlags::HAS_X)
            && (self.srid != other.srid
                || self.flags.contains(STBoxFlags::GEODETIC)
                    != other.flags.contains(STBoxFlags::GEODETIC))
        {
            return None;
        }
        Some(common)
    }

    /// Whether `other` lies inside this box on every dimension both boxes have.
    ///
    /// The time axis compares raw timestamps; bound inclusivity is ignored.
    pub fn contains(&self, other: &Self) -> bool {
        let Some(common) = self.common(other) else {
            return false;
        };
        let (a, b) = (self.xy, other.xy);
        if common.contains(STBoxFlags::HAS_X)
            && (b.x0 < a.x0 || b.x1 > a.x1 || b.y0 < a.y0 || b.y1 > a.y1)
        {
            return false;
        }
        if common.contains(STBoxFlags::HAS_Z) && (other.zmin < self.zmin || other.zmax > self.zmax)
        {
            return false;
        }
        if common.contains(STBoxFlags::HAS_T)
            && (other.period.lower() < self.period.lower()
                || other.period.upper() > self.period.upper())
        {
            return false;
        }
        true
    }

    /// Whether the boxes intersect on every dimension both boxes have.
    ///
    /// All axes are treated as closed intervals.
    pub fn overlaps(&self, other: &Self) -> bool {
        let Some(common) = self.common(other) else {
            return false;
        };
        let (a, b) = (self.xy, other.xy);
        if common.contains(STBoxFlags::HAS_X)
            && (a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
        {
            return false;
        }
        if common.contains(STBoxFlags::HAS_Z) && (self.zmax < other.zmin || self.zmin > other.zmax)
        {
            return false;
        }
        if common.contains(STBoxFlags::HAS_T)
            && (self.period.upper() < other.period.lower()
                || self.period.lower() > other.period.upper())
        {
            return false;
        }
        true
    }

    /// Grow this box to cover `other` on the dimensions this box has.
    ///
    /// SRID and dimensionality are not checked.
    pub fn expand(&mut self, other: &Self) {
        if self.flags.contains(STBoxFlags::HAS_X) {
            self.xy = self.xy.union(other.xy);
            if self.flags.intersects(STBoxFlags::HAS_Z | STBoxFlags::GEODETIC) {
                self.zmin = self.zmin.min(other.zmin);
                self.zmax = self.zmax.max(other.zmax);
            }
        }
        if self.flags.contains(STBoxFlags::HAS_T) {
            self.period.expand(&other.period);
        }
    }
}

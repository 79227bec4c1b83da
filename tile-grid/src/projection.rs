//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Forward cartographic projections from lon/lat degrees to planar meters

use crate::error::GridError;
use crate::grid::Extent;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

const EPS10: f64 = 1.0e-10;

/// Reference ellipsoid
#[derive(PartialEq, Clone, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Inverse flattening (0 for a sphere)
    pub rf: f64,
}

impl Ellipsoid {
    pub fn sphere(radius: f64) -> Ellipsoid {
        Ellipsoid { a: radius, rf: 0.0 }
    }
    /// Ellipsoid by PROJ name
    pub fn by_name(name: &str) -> Option<Ellipsoid> {
        let (a, rf) = match name {
            "WGS84" => (6378137.0, 298.257223563),
            "GRS80" => (6378137.0, 298.257222101),
            "bessel" => (6377397.155, 299.1528128),
            "intl" => (6378388.0, 297.0),
            "clrk66" => (6378206.4, 294.978698214),
            "airy" => (6377563.396, 299.3249646),
            "sphere" => (6370997.0, 0.0),
            _ => return None,
        };
        Some(Ellipsoid { a, rf })
    }
    /// First eccentricity
    pub fn e(&self) -> f64 {
        if self.rf == 0.0 {
            0.0
        } else {
            let f = 1.0 / self.rf;
            (f * (2.0 - f)).sqrt()
        }
    }
}

/// Entry of a projection attribute list
#[derive(PartialEq, Clone, Debug)]
pub enum ProjectionParam {
    Number(f64),
    Name(String),
}

impl ProjectionParam {
    fn number(&self, what: &str) -> Result<f64, GridError> {
        match self {
            ProjectionParam::Number(v) if v.is_finite() => Ok(*v),
            ProjectionParam::Number(v) => Err(GridError::InvalidProjectionParameters(format!(
                "{} must be finite, got {}",
                what, v
            ))),
            ProjectionParam::Name(s) => Err(GridError::InvalidProjectionParameters(format!(
                "{} must be a number, got '{}'",
                what, s
            ))),
        }
    }
}

/// Supported projection names
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ProjectionKind {
    /// Lambert Azimuthal Equal-Area
    Laea,
    /// Oblique (double) stereographic, as used by the Dutch RD grid
    Rd,
}

impl FromStr for ProjectionKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAEA" => Ok(ProjectionKind::Laea),
            "RD" => Ok(ProjectionKind::Rd),
            _ => Err(GridError::UnsupportedProjection(s.to_string())),
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionKind::Laea => write!(f, "LAEA"),
            ProjectionKind::Rd => write!(f, "RD"),
        }
    }
}

/// Spherical Lambert Azimuthal Equal-Area
#[derive(Clone, Debug)]
pub struct Laea {
    lon_0: f64,
    sinph0: f64,
    cosph0: f64,
    x_0: f64,
    y_0: f64,
    radius: f64,
}

impl Laea {
    pub fn new(lon_0: f64, lat_0: f64, x_0: f64, y_0: f64, radius: f64) -> Laea {
        let phi0 = lat_0.to_radians();
        Laea {
            lon_0,
            sinph0: phi0.sin(),
            cosph0: phi0.cos(),
            x_0,
            y_0,
            radius,
        }
    }

    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let lam = (lon - self.lon_0).to_radians();
        let phi = lat.to_radians();
        let (sinphi, cosphi) = phi.sin_cos();
        let coslam = lam.cos();
        let denom = 1.0 + self.sinph0 * sinphi + self.cosph0 * cosphi * coslam;
        // antipode of the projection centre
        if denom <= EPS10 {
            return None;
        }
        let k = (2.0 / denom).sqrt();
        let x = k * cosphi * lam.sin();
        let y = k * (self.cosph0 * sinphi - self.sinph0 * cosphi * coslam);
        Some((
            self.radius * x + self.x_0,
            self.radius * y + self.y_0,
        ))
    }
}

/// Oblique stereographic on the Gauss conformal sphere
#[derive(Clone, Debug)]
pub struct Sterea {
    lon_0: f64,
    x_0: f64,
    y_0: f64,
    a: f64,
    e: f64,
    // Gauss sphere constants
    c: f64,
    k: f64,
    ratexp: f64,
    sinc0: f64,
    cosc0: f64,
    r2: f64,
}

fn srat(esinp: f64, exp: f64) -> f64 {
    ((1.0 - esinp) / (1.0 + esinp)).powf(exp)
}

impl Sterea {
    pub fn new(lon_0: f64, lat_0: f64, x_0: f64, y_0: f64, ellps: &Ellipsoid) -> Sterea {
        let e = ellps.e();
        let es = e * e;
        let phi0 = lat_0.to_radians();
        let sphi = phi0.sin();
        let cphi2 = phi0.cos() * phi0.cos();
        let rc = (1.0 - es).sqrt() / (1.0 - es * sphi * sphi);
        let c = (1.0 + es * cphi2 * cphi2 / (1.0 - es)).sqrt();
        let chi = (sphi / c).asin();
        let ratexp = 0.5 * c * e;
        let k = (0.5 * chi + FRAC_PI_4).tan()
            / ((0.5 * phi0 + FRAC_PI_4).tan().powf(c) * srat(e * sphi, ratexp));
        Sterea {
            lon_0,
            x_0,
            y_0,
            a: ellps.a,
            e,
            c,
            k,
            ratexp,
            sinc0: chi.sin(),
            cosc0: chi.cos(),
            r2: 2.0 * rc,
        }
    }

    /// Geodetic to conformal sphere coordinates (radians)
    fn gauss(&self, lam: f64, phi: f64) -> (f64, f64) {
        let chi = 2.0
            * (self.k
                * (0.5 * phi + FRAC_PI_4).tan().powf(self.c)
                * srat(self.e * phi.sin(), self.ratexp))
            .atan()
            - FRAC_PI_2;
        (self.c * lam, chi)
    }

    fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        let (lam, chi) = self.gauss((lon - self.lon_0).to_radians(), lat.to_radians());
        let (sinc, cosc) = chi.sin_cos();
        let cosl = lam.cos();
        let denom = 1.0 + self.sinc0 * sinc + self.cosc0 * cosc * cosl;
        if denom.abs() <= EPS10 {
            return None;
        }
        let k = self.r2 / denom;
        let x = k * cosc * lam.sin();
        let y = k * (self.cosc0 * sinc - self.sinc0 * cosc * cosl);
        Some((self.a * x + self.x_0, self.a * y + self.y_0))
    }
}

/// Projection from lon/lat degrees to planar meters
#[derive(Clone, Debug)]
pub enum Projection {
    Laea(Laea),
    Sterea(Sterea),
}

impl Projection {
    /// Build a projection from its name and the attribute list
    /// `[lon_0, lat_0, false_easting, false_northing, radius_or_ellipsoid]`.
    pub fn from_params(name: &str, params: &[ProjectionParam]) -> Result<Projection, GridError> {
        let kind = ProjectionKind::from_str(name)?;
        if params.len() < 5 {
            return Err(GridError::InvalidProjectionParameters(format!(
                "{} requires 5 attributes [lon_0, lat_0, false_easting, false_northing, {}], got {}",
                kind,
                if kind == ProjectionKind::Laea {
                    "earth_radius"
                } else {
                    "ellipsoid"
                },
                params.len()
            )));
        }
        let lon_0 = params[0].number("central longitude")?;
        let lat_0 = params[1].number("central latitude")?;
        let x_0 = params[2].number("false easting")?;
        let y_0 = params[3].number("false northing")?;
        if !(-90.0..=90.0).contains(&lat_0) {
            return Err(GridError::InvalidProjectionParameters(format!(
                "central latitude must be within [-90, 90], got {}",
                lat_0
            )));
        }
        match kind {
            ProjectionKind::Laea => {
                let radius = params[4].number("earth radius")?;
                if radius <= 0.0 {
                    return Err(GridError::InvalidProjectionParameters(format!(
                        "earth radius must be positive, got {}",
                        radius
                    )));
                }
                Ok(Projection::Laea(Laea::new(lon_0, lat_0, x_0, y_0, radius)))
            }
            ProjectionKind::Rd => {
                let ellps = match &params[4] {
                    ProjectionParam::Name(name) => Ellipsoid::by_name(name).ok_or_else(|| {
                        GridError::InvalidProjectionParameters(format!(
                            "unknown ellipsoid '{}'",
                            name
                        ))
                    })?,
                    ProjectionParam::Number(radius) if radius.is_finite() && *radius > 0.0 => {
                        Ellipsoid::sphere(*radius)
                    }
                    ProjectionParam::Number(radius) => {
                        return Err(GridError::InvalidProjectionParameters(format!(
                            "ellipsoid must be a name or a positive sphere radius, got {}",
                            radius
                        )))
                    }
                };
                Ok(Projection::Sterea(Sterea::new(lon_0, lat_0, x_0, y_0, &ellps)))
            }
        }
    }

    pub fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Laea(_) => ProjectionKind::Laea,
            Projection::Sterea(_) => ProjectionKind::Rd,
        }
    }

    /// Returns the projected (x, y) in meters
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), GridError> {
        let xy = match self {
            Projection::Laea(p) => p.forward(lon, lat),
            Projection::Sterea(p) => p.forward(lon, lat),
        };
        match xy {
            Some((x, y)) if x.is_finite() && y.is_finite() => Ok((x, y)),
            _ => Err(GridError::InvalidBounds(format!(
                "point ({}, {}) cannot be projected with {}",
                lon,
                lat,
                self.kind()
            ))),
        }
    }

    /// Projected extent spanned by the lower left and upper right corners
    pub fn project_extent(&self, extent: &Extent) -> Result<Extent, GridError> {
        let (minx, miny) = self.project(extent.minx, extent.miny)?;
        let (maxx, maxy) = self.project(extent.maxx, extent.maxy)?;
        Ok(Extent {
            minx,
            miny,
            maxx,
            maxy,
        })
    }
}

//! XYZ ↔ Yxy conversion filters

use super::filter::TripleFilter;
use crate::color::Triple;
use crate::Error;

/// XYZ → Yxy; any other input kind is rejected
pub fn xyz_to_yxy() -> TripleFilter {
    TripleFilter::new(|t| match t {
        Triple::Xyz(xyz) => Ok(Triple::Yxy(xyz.to_yxy()?)),
        other => Err(Error::unsupported("xyz_to_yxy", other.kind())),
    })
}

/// Yxy → XYZ; any other input kind is rejected
pub fn yxy_to_xyz() -> TripleFilter {
    TripleFilter::new(|t| match t {
        Triple::Yxy(yxy) => Ok(Triple::Xyz(yxy.to_xyz()?)),
        other => Err(Error::unsupported("yxy_to_xyz", other.kind())),
    })
}

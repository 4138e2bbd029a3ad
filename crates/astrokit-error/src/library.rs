//! Library codes for the astrokit family

use strum_macros::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Where bugs in the error subsystem itself should be reported.
pub const BUG_REPORT: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");

/// Printed in place of a library name when a record carries an unknown code.
pub const UNKNOWN_LIBRARY: &str = concat!(
    "NOT-DEFINED! A bug! Please contact us at ",
    env!("CARGO_PKG_REPOSITORY"),
    "/issues"
);

/// The library that produced an error.
///
/// The discriminant is the `lib_code` stored in bits 16-23 of an
/// [`ErrorId`](crate::ErrorId). Zero is reserved as the invalid code, so
/// `from_repr(0)` is `None` like any other unassigned value. New libraries are
/// appended in alphabetical order; existing discriminants never move.
///
/// Each library displays as the name of its public header, which is how
/// diagnostics identify it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, FromRepr, EnumIter,
)]
#[repr(u8)]
#[non_exhaustive]
pub enum LibCode {
    /// Operators on datasets
    #[strum(serialize = "arithmetic.h")]
    Arithmetic = 1,
    /// Raw array allocation and copying
    #[strum(serialize = "array.h")]
    Array,
    /// Binary datasets (erosion, dilation, holes)
    #[strum(serialize = "binary.h")]
    Binary,
    /// Blank (missing) values per type
    #[strum(serialize = "blank.h")]
    Blank,
    /// Box overlap geometry
    #[strum(serialize = "box.h")]
    Box,
    /// Named colors
    #[strum(serialize = "color.h")]
    Color,
    /// Convolution kernels
    #[strum(serialize = "convolve.h")]
    Convolve,
    /// Distances, ages and volumes in a given cosmology
    #[strum(serialize = "cosmology.h")]
    Cosmology,
    /// The generic dataset container
    #[strum(serialize = "data.h")]
    Data,
    /// Multi-dimensional indexing
    #[strum(serialize = "dimension.h")]
    Dimension,
    /// SAOImage DS9 regions
    #[strum(serialize = "ds9.h")]
    Ds9,
    /// Encapsulated PostScript output
    #[strum(serialize = "eps.h")]
    Eps,
    /// This crate
    #[strum(serialize = "error.h")]
    Error,
    /// Boundary guard in executables
    #[strum(serialize = "errorinprogram.h")]
    ErrorInProgram,
    /// Linear and polynomial fits
    #[strum(serialize = "fit.h")]
    Fit,
    /// FITS files
    #[strum(serialize = "fits.h")]
    Fits,
    /// Version control metadata
    #[strum(serialize = "git.h")]
    Git,
    /// Interpolation over blank elements
    #[strum(serialize = "interpolate.h")]
    Interpolate,
    /// JPEG images
    #[strum(serialize = "jpeg.h")]
    Jpeg,
    /// k-d tree construction and search
    #[strum(serialize = "kdtree.h")]
    Kdtree,
    /// Connected-component labels
    #[strum(serialize = "label.h")]
    Label,
    /// Linked lists
    #[strum(serialize = "list.h")]
    List,
    /// Catalog matching
    #[strum(serialize = "match.h")]
    Match,
    /// PDF output
    #[strum(serialize = "pdf.h")]
    Pdf,
    /// Permutations of arrays
    #[strum(serialize = "permutation.h")]
    Permutation,
    /// Pointer arithmetic helpers
    #[strum(serialize = "pointer.h")]
    Pointer,
    /// Polygon geometry
    #[strum(serialize = "polygon.h")]
    Polygon,
    /// Thread pools
    #[strum(serialize = "pool.h")]
    Pool,
    /// Python bindings
    #[strum(serialize = "python.h")]
    Python,
    /// Sorting
    #[strum(serialize = "qsort.h")]
    Qsort,
    /// Spectral lines
    #[strum(serialize = "speclines.h")]
    Speclines,
    /// Statistics over datasets
    #[strum(serialize = "statistics.h")]
    Statistics,
    /// Tables
    #[strum(serialize = "table.h")]
    Table,
    /// Threading helpers
    #[strum(serialize = "threads.h")]
    Threads,
    /// TIFF images
    #[strum(serialize = "tiff.h")]
    Tiff,
    /// Tiles over datasets
    #[strum(serialize = "tile.h")]
    Tile,
    /// Plain-text tables and images
    #[strum(serialize = "txt.h")]
    Txt,
    /// Numeric types
    #[strum(serialize = "type.h")]
    Type,
    /// Unit conversions
    #[strum(serialize = "units.h")]
    Units,
    /// Warping images
    #[strum(serialize = "warp.h")]
    Warp,
    /// World coordinate systems
    #[strum(serialize = "wcs.h")]
    Wcs,
}

impl LibCode {
    /// Returns the library name as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The 8-bit value placed in an encoded identifier.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Resolve a raw `lib_code` to its library name.
///
/// Unknown codes resolve to [`UNKNOWN_LIBRARY`], which asks the reader to
/// report the bug.
pub fn lib_name(lib_code: u8) -> &'static str {
    LibCode::from_repr(lib_code).map_or(UNKNOWN_LIBRARY, |lib| lib.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lib_names() {
        assert_eq!(LibCode::Binary.to_string(), "binary.h");
        assert_eq!(LibCode::Ds9.as_str(), "ds9.h");
        assert_eq!(LibCode::ErrorInProgram.as_str(), "errorinprogram.h");
        assert_eq!(lib_name(LibCode::Cosmology.code()), "cosmology.h");
    }

    #[test]
    fn test_names_follow_variants() {
        for lib in LibCode::iter() {
            let name = lib.as_str();
            assert!(name.ends_with(".h"), "{name}");
            assert_eq!(name.trim_end_matches(".h"), format!("{lib:?}").to_lowercase());
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(LibCode::Arithmetic.code(), 1);
        assert_eq!(LibCode::Binary.code(), 3);
        assert_eq!(LibCode::Cosmology.code(), 8);
        assert_eq!(LibCode::Wcs.code(), 41);
    }

    #[test]
    fn test_codes_are_contiguous() {
        for (index, lib) in LibCode::iter().enumerate() {
            assert_eq!(usize::from(lib.code()), index + 1, "{lib} is out of place");
            assert_eq!(LibCode::from_repr(lib.code()), Some(lib));
        }
    }

    #[test]
    fn test_unknown_code_is_a_bug_report() {
        assert_eq!(lib_name(0), UNKNOWN_LIBRARY);
        assert_eq!(lib_name(200), UNKNOWN_LIBRARY);
        assert!(UNKNOWN_LIBRARY.starts_with("NOT-DEFINED! A bug!"));
        assert!(UNKNOWN_LIBRARY.ends_with(BUG_REPORT));
    }
}

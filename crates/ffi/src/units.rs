use physkit_core::{
    AbbreviatedUnit, Altitude, AngleUnit, ClassificationLevel, DistanceUnit, EnumeratedUnit,
    HumidityUnit, PressureUnit, TemperatureUnit, ToolkitError, ToolkitResult,
};
use std::os::raw::c_char;

use crate::error::{DefaultPhysKitError, PhysKitErrorCode};
use crate::helpers::{str_from_ptr, track_error, track_result, write_c_string};

/// Enumerated types reachable over the C ABI.
///
/// Callers pass the discriminant as a plain `uint32_t`; each variant of the
/// selected type is addressed by its zero-based declaration ordinal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysKitUnitKind {
    AngleUnit = 0,
    TemperatureUnit = 1,
    PressureUnit = 2,
    HumidityUnit = 3,
    DistanceUnit = 4,
    Altitude = 5,
    ClassificationLevel = 6,
}

fn canonical_ordinal<T: EnumeratedUnit>(text: Option<&str>) -> ToolkitResult<u32> {
    T::canonical_value_of(text).map(EnumeratedUnit::ordinal)
}

fn abbreviated_ordinal<T: AbbreviatedUnit>(text: Option<&str>) -> u32 {
    T::abbreviated_value_of(text).ordinal()
}

fn canonical_string<T: EnumeratedUnit>(ordinal: u32) -> ToolkitResult<&'static str> {
    T::from_ordinal(ordinal).map(EnumeratedUnit::to_canonical_string)
}

impl TryFrom<u32> for PhysKitUnitKind {
    type Error = DefaultPhysKitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::AngleUnit,
            1 => Self::TemperatureUnit,
            2 => Self::PressureUnit,
            3 => Self::HumidityUnit,
            4 => Self::DistanceUnit,
            5 => Self::Altitude,
            6 => Self::ClassificationLevel,
            _ => {
                return Err(ToolkitError::UnexpectedVariant {
                    type_name: "PhysKitUnitKind",
                    variant: value.to_string(),
                }
                .into())
            }
        })
    }
}

impl PhysKitUnitKind {
    fn canonical_value_of(self, text: Option<&str>) -> ToolkitResult<u32> {
        match self {
            Self::AngleUnit => canonical_ordinal::<AngleUnit>(text),
            Self::TemperatureUnit => canonical_ordinal::<TemperatureUnit>(text),
            Self::PressureUnit => canonical_ordinal::<PressureUnit>(text),
            Self::HumidityUnit => canonical_ordinal::<HumidityUnit>(text),
            Self::DistanceUnit => canonical_ordinal::<DistanceUnit>(text),
            Self::Altitude => canonical_ordinal::<Altitude>(text),
            Self::ClassificationLevel => canonical_ordinal::<ClassificationLevel>(text),
        }
    }

    fn abbreviated_value_of(self, text: Option<&str>) -> ToolkitResult<u32> {
        Ok(match self {
            Self::AngleUnit => abbreviated_ordinal::<AngleUnit>(text),
            Self::TemperatureUnit => abbreviated_ordinal::<TemperatureUnit>(text),
            Self::PressureUnit => abbreviated_ordinal::<PressureUnit>(text),
            Self::HumidityUnit => abbreviated_ordinal::<HumidityUnit>(text),
            Self::DistanceUnit => abbreviated_ordinal::<DistanceUnit>(text),
            Self::ClassificationLevel => abbreviated_ordinal::<ClassificationLevel>(text),
            Self::Altitude => {
                return Err(ToolkitError::InvalidArgument(
                    "Altitude has no abbreviated form".to_owned(),
                ))
            }
        })
    }

    fn canonical_string(self, ordinal: u32) -> ToolkitResult<&'static str> {
        match self {
            Self::AngleUnit => canonical_string::<AngleUnit>(ordinal),
            Self::TemperatureUnit => canonical_string::<TemperatureUnit>(ordinal),
            Self::PressureUnit => canonical_string::<PressureUnit>(ordinal),
            Self::HumidityUnit => canonical_string::<HumidityUnit>(ordinal),
            Self::DistanceUnit => canonical_string::<DistanceUnit>(ordinal),
            Self::Altitude => canonical_string::<Altitude>(ordinal),
            Self::ClassificationLevel => canonical_string::<ClassificationLevel>(ordinal),
        }
    }
}

unsafe fn parse_with(
    text: *const c_char,
    out_ordinal: *mut u32,
    parse: impl FnOnce(Option<&str>) -> Result<u32, DefaultPhysKitError>,
) -> PhysKitErrorCode {
    if out_ordinal.is_null() {
        return track_error(&DefaultPhysKitError::null_pointer("out_ordinal"));
    }
    let result = unsafe { str_from_ptr(text, "text") }.and_then(parse);
    match track_result(result) {
        Ok(ordinal) => {
            unsafe {
                *out_ordinal = ordinal;
            }
            PhysKitErrorCode::Ok
        }
        Err(code) => code,
    }
}

unsafe fn write_result(
    text: Result<String, DefaultPhysKitError>,
    out_buffer: *mut c_char,
    capacity: usize,
) -> PhysKitErrorCode {
    let written = text.and_then(|text| unsafe { write_c_string(&text, out_buffer, capacity) });
    match track_result(written) {
        Ok(()) => PhysKitErrorCode::Ok,
        Err(code) => code,
    }
}

/// Strict parse of a canonical token (case-insensitive, no trimming).
///
/// `kind` is a `PhysKitUnitKind` discriminant; an unknown code returns
/// `UnexpectedVariant`. A null `text` yields the default variant. Unknown
/// text returns `InvalidArgument`.
///
/// # Safety
/// - `text` must be null or a NUL-terminated string.
/// - `out_ordinal` must be writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_unit_canonical_value_of(
    kind: u32,
    text: *const c_char,
    out_ordinal: *mut u32,
) -> PhysKitErrorCode {
    unsafe {
        parse_with(text, out_ordinal, |text| {
            PhysKitUnitKind::try_from(kind)
                .and_then(|kind| kind.canonical_value_of(text).map_err(DefaultPhysKitError::from))
        })
    }
}

/// Forgiving parse of an abbreviated symbol; unknown text yields the default
/// variant. `Altitude` has no symbols and returns `InvalidArgument`.
///
/// # Safety
/// Same contract as `physkit_unit_canonical_value_of`.
#[no_mangle]
pub unsafe extern "C" fn physkit_unit_abbreviated_value_of(
    kind: u32,
    text: *const c_char,
    out_ordinal: *mut u32,
) -> PhysKitErrorCode {
    unsafe {
        parse_with(text, out_ordinal, |text| {
            PhysKitUnitKind::try_from(kind)
                .and_then(|kind| kind.abbreviated_value_of(text).map_err(DefaultPhysKitError::from))
        })
    }
}

/// Writes the canonical token of variant `ordinal` of type `kind` into
/// `out_buffer`. An unknown `kind` code returns `UnexpectedVariant`.
///
/// # Safety
/// `out_buffer` must point to at least `capacity` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn physkit_unit_to_canonical_string(
    kind: u32,
    ordinal: u32,
    out_buffer: *mut c_char,
    capacity: usize,
) -> PhysKitErrorCode {
    let text = PhysKitUnitKind::try_from(kind).and_then(|kind| {
        kind.canonical_string(ordinal)
            .map(str::to_owned)
            .map_err(DefaultPhysKitError::from)
    });
    unsafe { write_result(text, out_buffer, capacity) }
}

/// Writes the altitude band description, e.g. `"Between 1 and 5 kilometers"`.
///
/// # Safety
/// `out_buffer` must point to at least `capacity` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn physkit_altitude_to_presentation_string(
    altitude_ordinal: u32,
    distance_unit_ordinal: u32,
    out_buffer: *mut c_char,
    capacity: usize,
) -> PhysKitErrorCode {
    let text = Altitude::from_ordinal(altitude_ordinal)
        .and_then(|altitude| {
            DistanceUnit::from_ordinal(distance_unit_ordinal)
                .map(|unit| altitude.to_presentation_string(unit))
        })
        .map_err(DefaultPhysKitError::from);
    unsafe { write_result(text, out_buffer, capacity) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};
    use std::ptr;

    fn read_buffer(buffer: &[c_char]) -> String {
        unsafe { CStr::from_ptr(buffer.as_ptr()) }
            .to_str()
            .unwrap()
            .to_owned()
    }

    #[test]
    fn test_canonical_parse() {
        let text = CString::new("Fahrenheit").unwrap();
        let mut ordinal = 99;
        let code = unsafe {
            physkit_unit_canonical_value_of(
                PhysKitUnitKind::TemperatureUnit as u32,
                text.as_ptr(),
                &mut ordinal,
            )
        };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert_eq!(ordinal, TemperatureUnit::Fahrenheit.ordinal());
    }

    #[test]
    fn test_canonical_parse_rejects_unknown() {
        let text = CString::new("parsecs").unwrap();
        let mut ordinal = 99;
        let code = unsafe {
            physkit_unit_canonical_value_of(
                PhysKitUnitKind::DistanceUnit as u32,
                text.as_ptr(),
                &mut ordinal,
            )
        };
        assert_eq!(code, PhysKitErrorCode::InvalidArgument);
        assert_eq!(ordinal, 99);
    }

    #[test]
    fn test_null_text_is_default() {
        let mut ordinal = 99;
        let code = unsafe {
            physkit_unit_canonical_value_of(
                PhysKitUnitKind::ClassificationLevel as u32,
                ptr::null(),
                &mut ordinal,
            )
        };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert_eq!(ordinal, 0);
    }

    #[test]
    fn test_abbreviated_parse_is_forgiving() {
        let text = CString::new("furlongs").unwrap();
        let mut ordinal = 99;
        let code = unsafe {
            physkit_unit_abbreviated_value_of(
                PhysKitUnitKind::PressureUnit as u32,
                text.as_ptr(),
                &mut ordinal,
            )
        };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert_eq!(ordinal, PressureUnit::Pascals.ordinal());
    }

    #[test]
    fn test_canonical_string_into_buffer() {
        let mut buffer = [0 as c_char; 32];
        let code = unsafe {
            physkit_unit_to_canonical_string(
                PhysKitUnitKind::ClassificationLevel as u32,
                3,
                buffer.as_mut_ptr(),
                buffer.len(),
            )
        };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert_eq!(read_buffer(&buffer), "top secret");

        let mut tiny = [0 as c_char; 4];
        let code = unsafe {
            physkit_unit_to_canonical_string(
                PhysKitUnitKind::ClassificationLevel as u32,
                3,
                tiny.as_mut_ptr(),
                tiny.len(),
            )
        };
        assert_eq!(code, PhysKitErrorCode::BufferTooSmall);
    }

    #[test]
    fn test_altitude_presentation() {
        let mut buffer = [0 as c_char; 64];
        let km = DistanceUnit::Kilometers.ordinal();
        let code = unsafe {
            physkit_altitude_to_presentation_string(1, km, buffer.as_mut_ptr(), buffer.len())
        };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert_eq!(read_buffer(&buffer), "Between 1 and 5 kilometers");

        let code = unsafe {
            physkit_altitude_to_presentation_string(7, km, buffer.as_mut_ptr(), buffer.len())
        };
        assert_eq!(code, PhysKitErrorCode::UnexpectedVariant);
    }

    #[test]
    fn test_unknown_kind_code_is_rejected() {
        use crate::error::{physkit_get_last_error, physkit_get_last_error_code};

        let text = CString::new("Celsius").unwrap();
        let mut ordinal = 42;
        let code = unsafe { physkit_unit_canonical_value_of(99, text.as_ptr(), &mut ordinal) };
        assert_eq!(code, PhysKitErrorCode::UnexpectedVariant);
        assert_eq!(physkit_get_last_error_code(), PhysKitErrorCode::UnexpectedVariant);
        let message = unsafe { CStr::from_ptr(physkit_get_last_error()) };
        assert_eq!(message.to_str().unwrap(), "Unexpected PhysKitUnitKind 99");
        assert_eq!(ordinal, 42);

        let code = unsafe { physkit_unit_abbreviated_value_of(7, text.as_ptr(), &mut ordinal) };
        assert_eq!(code, PhysKitErrorCode::UnexpectedVariant);
        assert_eq!(ordinal, 42);

        let mut buffer = [0 as c_char; 16];
        let code =
            unsafe { physkit_unit_to_canonical_string(99, 0, buffer.as_mut_ptr(), buffer.len()) };
        assert_eq!(code, PhysKitErrorCode::UnexpectedVariant);
    }

    #[test]
    fn test_kind_code_matches_discriminant() {
        for kind in [
            PhysKitUnitKind::AngleUnit,
            PhysKitUnitKind::TemperatureUnit,
            PhysKitUnitKind::PressureUnit,
            PhysKitUnitKind::HumidityUnit,
            PhysKitUnitKind::DistanceUnit,
            PhysKitUnitKind::Altitude,
            PhysKitUnitKind::ClassificationLevel,
        ] {
            assert_eq!(PhysKitUnitKind::try_from(kind as u32), Ok(kind));
        }
    }
}

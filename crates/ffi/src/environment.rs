use physkit_core::{EnvironmentSettings, Kelvin, NaturalEnvironment, Pascals, Percent};
use std::ptr;
use std::sync::Mutex;
use tracing::info;

use crate::error::{DefaultPhysKitError, PhysKitErrorCode};
use crate::helpers::{clear_last_error, track_error, track_result, with_environment};

/// Opaque natural-environment handle.
///
/// # Thread Safety
/// The environment is guarded by a `Mutex`, so a handle may be shared across
/// threads. Listeners are not exposed over the C ABI; poll
/// `physkit_environment_is_changed` instead.
pub struct PhysKitEnvironment {
    pub(crate) env: Mutex<NaturalEnvironment>,
}

impl PhysKitEnvironment {
    fn boxed(env: NaturalEnvironment) -> Box<Self> {
        Box::new(Self {
            env: Mutex::new(env),
        })
    }
}

/// Plain environment values for C callers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysKitEnvironmentValues {
    /// Temperature (K).
    pub temperature_k: f64,

    /// Relative humidity (%).
    pub humidity_relative: f64,

    /// Pressure (Pa).
    pub pressure_pa: f64,

    /// Whether air attenuation is applied.
    pub air_attenuation_applied: bool,
}

impl From<EnvironmentSettings> for PhysKitEnvironmentValues {
    fn from(settings: EnvironmentSettings) -> Self {
        Self {
            temperature_k: *settings.temperature_k,
            humidity_relative: *settings.humidity_relative,
            pressure_pa: *settings.pressure_pa,
            air_attenuation_applied: settings.air_attenuation_applied,
        }
    }
}

impl From<PhysKitEnvironmentValues> for EnvironmentSettings {
    fn from(values: PhysKitEnvironmentValues) -> Self {
        Self {
            temperature_k: Kelvin::new(values.temperature_k),
            humidity_relative: Percent::new(values.humidity_relative),
            pressure_pa: Pascals::new(values.pressure_pa),
            air_attenuation_applied: values.air_attenuation_applied,
        }
    }
}

unsafe fn publish(
    env: NaturalEnvironment,
    out_instance: *mut *mut PhysKitEnvironment,
) -> PhysKitErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultPhysKitError::null_pointer("out_instance"));
    }
    unsafe {
        *out_instance = Box::into_raw(PhysKitEnvironment::boxed(env));
    }
    clear_last_error();
    PhysKitErrorCode::Ok
}

/// Creates an environment holding the default values
/// (293.15 K, 50 % relative humidity, 101325 Pa, attenuation applied).
///
/// # Safety
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller owns the returned handle and MUST call
///   `physkit_environment_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_new(
    out_instance: *mut *mut PhysKitEnvironment,
) -> PhysKitErrorCode {
    unsafe { publish(NaturalEnvironment::default(), out_instance) }
}

/// Creates an environment from explicit values.
///
/// # Safety
/// Same contract as `physkit_environment_new`.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_new_with(
    values: PhysKitEnvironmentValues,
    out_instance: *mut *mut PhysKitEnvironment,
) -> PhysKitErrorCode {
    let env = NaturalEnvironment::from_settings(values.into());
    info!(?env, "creating natural environment from values");
    unsafe { publish(env, out_instance) }
}

/// Creates an independent copy of `source`.
///
/// # Safety
/// - `source` must be a live handle.
/// - `out_instance` follows the `physkit_environment_new` contract.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_copy(
    source: *const PhysKitEnvironment,
    out_instance: *mut *mut PhysKitEnvironment,
) -> PhysKitErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultPhysKitError::null_pointer("out_instance"));
    }
    match track_result(unsafe { with_environment(source, |env| NaturalEnvironment::copy_of(env)) }) {
        Ok(copy) => unsafe { publish(copy, out_instance) },
        Err(code) => {
            unsafe {
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroys an environment created by `physkit_environment_new*` or
/// `physkit_environment_copy`. Null is a no-op.
///
/// # Safety
/// The pointer must not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_destroy(ptr: *mut PhysKitEnvironment) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: created by `Box::into_raw` in `publish`.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

unsafe fn read_into<T>(
    env: *const PhysKitEnvironment,
    out: *mut T,
    out_name: &str,
    read: impl FnOnce(&mut NaturalEnvironment) -> Result<T, DefaultPhysKitError>,
) -> PhysKitErrorCode {
    if out.is_null() {
        return track_error(&DefaultPhysKitError::null_pointer(out_name));
    }
    match track_result(unsafe { with_environment(env, read) }.and_then(|inner| inner)) {
        Ok(value) => {
            unsafe {
                *out = value;
            }
            PhysKitErrorCode::Ok
        }
        Err(code) => code,
    }
}

unsafe fn write_with(
    env: *const PhysKitEnvironment,
    write: impl FnOnce(&mut NaturalEnvironment),
) -> PhysKitErrorCode {
    match track_result(unsafe { with_environment(env, write) }) {
        Ok(()) => PhysKitErrorCode::Ok,
        Err(code) => code,
    }
}

/// Reads all values at once.
///
/// # Safety
/// `env` must be a live handle and `out_values` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_get_values(
    env: *const PhysKitEnvironment,
    out_values: *mut PhysKitEnvironmentValues,
) -> PhysKitErrorCode {
    unsafe { read_into(env, out_values, "out_values", |env| Ok(env.settings().into())) }
}

/// Temperature in the unit with declaration index `unit_ordinal`
/// (0 = kelvin, 1 = celsius, 2 = fahrenheit).
///
/// Returns `UnexpectedVariant` for an unknown ordinal; `out_value` is left
/// untouched.
///
/// # Safety
/// `env` must be a live handle and `out_value` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_get_temperature(
    env: *const PhysKitEnvironment,
    unit_ordinal: u32,
    out_value: *mut f64,
) -> PhysKitErrorCode {
    unsafe {
        read_into(env, out_value, "out_value", |env| {
            env.temperature_for_ordinal(unit_ordinal).map_err(Into::into)
        })
    }
}

/// Sets temperature in the unit with declaration index `unit_ordinal`.
///
/// An unknown ordinal is logged and ignored; the call still returns `Ok`.
///
/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_temperature(
    env: *const PhysKitEnvironment,
    value: f64,
    unit_ordinal: u32,
) -> PhysKitErrorCode {
    unsafe { write_with(env, |env| env.set_temperature_for_ordinal(value, unit_ordinal)) }
}

/// Relative humidity (%).
///
/// # Safety
/// `env` must be a live handle and `out_value` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_get_humidity(
    env: *const PhysKitEnvironment,
    out_value: *mut f64,
) -> PhysKitErrorCode {
    unsafe { read_into(env, out_value, "out_value", |env| Ok(*env.humidity_relative())) }
}

/// Sets humidity in the unit with declaration index `unit_ordinal`
/// (0 = relative, 1 = molar). Molar values are ignored.
///
/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_humidity(
    env: *const PhysKitEnvironment,
    value: f64,
    unit_ordinal: u32,
) -> PhysKitErrorCode {
    unsafe { write_with(env, |env| env.set_humidity_for_ordinal(value, unit_ordinal)) }
}

/// Pressure in the unit with declaration index `unit_ordinal`
/// (0 = kilopascals, 1 = pascals, 2 = millibars, 3 = atmospheres).
///
/// # Safety
/// `env` must be a live handle and `out_value` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_get_pressure(
    env: *const PhysKitEnvironment,
    unit_ordinal: u32,
    out_value: *mut f64,
) -> PhysKitErrorCode {
    unsafe {
        read_into(env, out_value, "out_value", |env| {
            env.pressure_for_ordinal(unit_ordinal).map_err(Into::into)
        })
    }
}

/// Sets pressure in the unit with declaration index `unit_ordinal`.
///
/// An unknown ordinal is logged and ignored; the call still returns `Ok`.
///
/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_pressure(
    env: *const PhysKitEnvironment,
    value: f64,
    unit_ordinal: u32,
) -> PhysKitErrorCode {
    unsafe { write_with(env, |env| env.set_pressure_for_ordinal(value, unit_ordinal)) }
}

/// # Safety
/// `env` must be a live handle and `out_value` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_is_air_attenuation_applied(
    env: *const PhysKitEnvironment,
    out_value: *mut bool,
) -> PhysKitErrorCode {
    unsafe {
        read_into(env, out_value, "out_value", |env| {
            Ok(env.is_air_attenuation_applied())
        })
    }
}

/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_air_attenuation_applied(
    env: *const PhysKitEnvironment,
    applied: bool,
) -> PhysKitErrorCode {
    unsafe { write_with(env, |env| env.set_air_attenuation_applied(applied)) }
}

/// Assigns all four values.
///
/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_values(
    env: *const PhysKitEnvironment,
    values: PhysKitEnvironmentValues,
) -> PhysKitErrorCode {
    unsafe { write_with(env, |env| env.apply_settings(values.into())) }
}

/// Copies the values of `source` into `env`.
///
/// # Safety
/// Both handles must be live. Passing the same handle twice is allowed.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_set_from(
    env: *const PhysKitEnvironment,
    source: *const PhysKitEnvironment,
) -> PhysKitErrorCode {
    // Snapshot first so the two locks are never held together.
    let settings = match track_result(unsafe { with_environment(source, |src| src.settings()) }) {
        Ok(settings) => settings,
        Err(code) => return code,
    };
    unsafe { write_with(env, |env| env.apply_settings(settings)) }
}

/// Restores the default values.
///
/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_reset(
    env: *const PhysKitEnvironment,
) -> PhysKitErrorCode {
    unsafe { write_with(env, NaturalEnvironment::reset) }
}

/// Whether any value was assigned since creation or the last
/// `physkit_environment_clear_changed`.
///
/// # Safety
/// `env` must be a live handle and `out_changed` writable.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_is_changed(
    env: *const PhysKitEnvironment,
    out_changed: *mut bool,
) -> PhysKitErrorCode {
    unsafe { read_into(env, out_changed, "out_changed", |env| Ok(env.is_changed())) }
}

/// # Safety
/// `env` must be a live handle.
#[no_mangle]
pub unsafe extern "C" fn physkit_environment_clear_changed(
    env: *const PhysKitEnvironment,
) -> PhysKitErrorCode {
    unsafe { write_with(env, NaturalEnvironment::clear_changed) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{physkit_get_last_error, physkit_get_last_error_code};
    use std::ffi::CStr;

    fn new_env() -> *mut PhysKitEnvironment {
        let mut ptr = ptr::null_mut();
        assert_eq!(unsafe { physkit_environment_new(&mut ptr) }, PhysKitErrorCode::Ok);
        assert!(!ptr.is_null());
        ptr
    }

    #[test]
    fn test_defaults_over_ffi() {
        let env = new_env();
        let mut values = PhysKitEnvironmentValues {
            temperature_k: 0.0,
            humidity_relative: 0.0,
            pressure_pa: 0.0,
            air_attenuation_applied: false,
        };
        let code = unsafe { physkit_environment_get_values(env, &mut values) };
        assert_eq!(code, PhysKitErrorCode::Ok);
        assert!((values.temperature_k - 293.15).abs() < 1e-9);
        assert!((values.humidity_relative - 50.0).abs() < 1e-9);
        assert!((values.pressure_pa - 101_325.0).abs() < 1e-9);
        assert!(values.air_attenuation_applied);
        unsafe { physkit_environment_destroy(env) };
    }

    #[test]
    fn test_temperature_by_ordinal() {
        let env = new_env();
        let mut celsius = 0.0;
        unsafe {
            assert_eq!(physkit_environment_set_temperature(env, 25.0, 1), PhysKitErrorCode::Ok);
            assert_eq!(
                physkit_environment_get_temperature(env, 1, &mut celsius),
                PhysKitErrorCode::Ok
            );
        }
        assert!((celsius - 25.0).abs() < 1e-9);
        unsafe { physkit_environment_destroy(env) };
    }

    #[test]
    fn test_unknown_ordinal_get_fails_set_ignores() {
        let env = new_env();
        let mut value = -1.0;
        unsafe {
            assert_eq!(
                physkit_environment_get_pressure(env, 9, &mut value),
                PhysKitErrorCode::UnexpectedVariant
            );
            assert_eq!(physkit_get_last_error_code(), PhysKitErrorCode::UnexpectedVariant);
            assert!((value + 1.0).abs() < f64::EPSILON);

            assert_eq!(physkit_environment_set_pressure(env, 1.0, 9), PhysKitErrorCode::Ok);
            assert_eq!(
                physkit_environment_get_pressure(env, 1, &mut value),
                PhysKitErrorCode::Ok
            );
            physkit_environment_destroy(env);
        }
        assert!((value - 101_325.0).abs() < 1e-9);
    }

    #[test]
    fn test_copy_and_set_from() {
        let source = new_env();
        let target = new_env();
        let mut copy = ptr::null_mut();
        let mut pressure = 0.0;
        unsafe {
            physkit_environment_set_pressure(source, 2.0, 3);
            assert_eq!(physkit_environment_copy(source, &mut copy), PhysKitErrorCode::Ok);
            physkit_environment_get_pressure(copy, 3, &mut pressure);
            assert!((pressure - 2.0).abs() < 1e-9);

            assert_eq!(physkit_environment_set_from(target, source), PhysKitErrorCode::Ok);
            physkit_environment_get_pressure(target, 1, &mut pressure);
            assert!((pressure - 202_650.0).abs() < 1e-6);

            assert_eq!(physkit_environment_set_from(target, target), PhysKitErrorCode::Ok);

            physkit_environment_destroy(copy);
            physkit_environment_destroy(target);
            physkit_environment_destroy(source);
        }
    }

    #[test]
    fn test_changed_flag() {
        let env = new_env();
        let mut changed = true;
        unsafe {
            physkit_environment_is_changed(env, &mut changed);
            assert!(!changed);
            physkit_environment_set_air_attenuation_applied(env, false);
            physkit_environment_is_changed(env, &mut changed);
            assert!(changed);
            physkit_environment_clear_changed(env);
            physkit_environment_reset(env);
            physkit_environment_is_changed(env, &mut changed);
            assert!(changed);
            physkit_environment_destroy(env);
        }
    }

    #[test]
    fn test_null_handles() {
        let mut value = 0.0;
        unsafe {
            assert_eq!(
                physkit_environment_get_humidity(ptr::null(), &mut value),
                PhysKitErrorCode::NullPointer
            );
            let message = CStr::from_ptr(physkit_get_last_error()).to_str().unwrap();
            assert_eq!(message, "Parameter 'env' cannot be null");
            assert_eq!(physkit_environment_new(ptr::null_mut()), PhysKitErrorCode::NullPointer);
            physkit_environment_destroy(ptr::null_mut());
        }
    }
}

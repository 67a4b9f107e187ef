//! Byte-level operations on `Quaternion<f64>` for the Typst plugin.
//!
//! Quaternions travel as CBOR maps `{re, i, j, k}`, reals as little-endian
//! `f64` and text as UTF-8. Every function here is plain Rust; the
//! `#[wasm_func]` wrappers live in `exports.rs`.

use std::string::FromUtf8Error;

use ciborium::Value;
use log::{debug, trace};
use num::complex::Complex64;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{ParseQuaternionError, Quaternion};

type Q = Quaternion<f64>;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Expected {expected} bytes for a number, found {found}")]
    InvalidNumberLength { expected: usize, found: usize },
    #[error("Invalid CBOR input")]
    Decode(#[from] ciborium::de::Error<std::io::Error>),
    #[error("Failed to encode CBOR output")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),
    #[error("Input is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
    #[error(transparent)]
    Parse(#[from] ParseQuaternionError),
    #[error("A quaternion has at most 4 components, found {0}")]
    TooManyComponents(usize),
    #[error("Component at index {0} is not a number")]
    NotANumber(usize),
}

pub(crate) trait IntoPluginOutput {
    fn into_plugin_output(self) -> Result<Vec<u8>, PluginError>;
}

impl IntoPluginOutput for f64 {
    fn into_plugin_output(self) -> Result<Vec<u8>, PluginError> {
        Ok(self.to_le_bytes().to_vec())
    }
}

impl IntoPluginOutput for String {
    fn into_plugin_output(self) -> Result<Vec<u8>, PluginError> {
        Ok(self.into_bytes())
    }
}

impl IntoPluginOutput for Q {
    fn into_plugin_output(self) -> Result<Vec<u8>, PluginError> {
        encode_cbor(&self)
    }
}

impl IntoPluginOutput for [f64; 3] {
    fn into_plugin_output(self) -> Result<Vec<u8>, PluginError> {
        encode_cbor(&self)
    }
}

fn encode_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, PluginError> {
    let mut out = Vec::new();
    ciborium::ser::into_writer(value, &mut out)?;
    Ok(out)
}

fn decode_cbor<T: DeserializeOwned>(arg: &[u8]) -> Result<T, PluginError> {
    ciborium::de::from_reader(arg).map_err(|err| {
        debug!("rejected CBOR argument of {} bytes: {}", arg.len(), err);
        PluginError::from(err)
    })
}

fn decode_f64(arg: &[u8]) -> Result<f64, PluginError> {
    let bytes: [u8; 8] = arg.try_into().map_err(|_| {
        debug!("rejected number argument of {} bytes", arg.len());
        PluginError::InvalidNumberLength {
            expected: 8,
            found: arg.len(),
        }
    })?;
    Ok(f64::from_le_bytes(bytes))
}

fn decode_text(arg: &[u8]) -> Result<String, PluginError> {
    // Typst renders negative numbers with U+2212
    Ok(String::from_utf8(arg.to_vec())?.replace('\u{2212}', "-"))
}

fn number_from_value(index: usize, value: Value) -> Result<f64, PluginError> {
    match value {
        Value::Float(x) => Ok(x),
        Value::Integer(n) => Ok(i128::from(n) as f64),
        _ => Err(PluginError::NotANumber(index)),
    }
}

/// Builds a quaternion from a CBOR list of up to four numbers, integers or
/// floats in any mix.
pub fn quaternion(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let parts: Vec<Value> = decode_cbor(arg)?;
    if parts.len() > 4 {
        return Err(PluginError::TooManyComponents(parts.len()));
    }
    let mut components = [0.0; 4];
    for (index, value) in parts.into_iter().enumerate() {
        components[index] = number_from_value(index, value)?;
    }
    let [re, i, j, k] = components;
    Q::new(re, i, j, k).into_plugin_output()
}

pub fn from_complex(re: &[u8], im: &[u8]) -> Result<Vec<u8>, PluginError> {
    let z = Complex64::new(decode_f64(re)?, decode_f64(im)?);
    Q::from(z).into_plugin_output()
}

/// Sums a CBOR list of quaternions.
pub fn add(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let terms: Vec<Q> = decode_cbor(arg)?;
    trace!("adding {} quaternions", terms.len());
    terms.into_iter().sum::<Q>().into_plugin_output()
}

pub fn sub(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, PluginError> {
    let (q1, q2): (Q, Q) = (decode_cbor(arg1)?, decode_cbor(arg2)?);
    (q1 - q2).into_plugin_output()
}

pub fn add_real(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg1)?;
    (q + decode_f64(arg2)?).into_plugin_output()
}

pub fn sub_real(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg1)?;
    (q - decode_f64(arg2)?).into_plugin_output()
}

/// `s - q`. Only the real component is subtracted; the imaginary components
/// of `q` are passed through with their sign unchanged.
pub fn real_sub(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg2)?;
    (decode_f64(arg1)? - q).into_plugin_output()
}

pub fn real(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg)?;
    q.real().into_plugin_output()
}

pub fn imag(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg)?;
    q.imag().into_plugin_output()
}

pub fn parse(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_text(arg)?.parse()?;
    q.into_plugin_output()
}

pub fn repr(arg: &[u8]) -> Result<Vec<u8>, PluginError> {
    let q: Q = decode_cbor(arg)?;
    q.to_string().into_plugin_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cbor<T: Serialize>(value: &T) -> Vec<u8> {
        encode_cbor(value).unwrap()
    }

    fn quaternion_from(out: Vec<u8>) -> Q {
        decode_cbor(&out).unwrap()
    }

    #[test]
    fn builds_from_partial_component_lists() {
        let out = quaternion(&cbor(&[1.0, 2.0])).unwrap();
        assert_eq!(quaternion_from(out), Q::new(1.0, 2.0, 0.0, 0.0));

        let out = quaternion(&cbor(&Vec::<f64>::new())).unwrap();
        assert_eq!(quaternion_from(out), Q::zero());

        let mixed = (1i64, 2.5f64, -3i32, 4u8);
        let out = quaternion(&cbor(&mixed)).unwrap();
        assert_eq!(quaternion_from(out), Q::new(1.0, 2.5, -3.0, 4.0));

        assert!(matches!(
            quaternion(&cbor(&(1.0, "two"))),
            Err(PluginError::NotANumber(1))
        ));

        assert!(matches!(
            quaternion(&cbor(&[0.0; 5])),
            Err(PluginError::TooManyComponents(5))
        ));
    }

    #[test]
    fn converts_complex_input() {
        let out = from_complex(&1.5f64.to_le_bytes(), &(-2.0f64).to_le_bytes()).unwrap();
        assert_eq!(quaternion_from(out), Q::new(1.5, -2.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_short_numbers() {
        assert!(matches!(
            from_complex(&[0u8; 4], &0.0f64.to_le_bytes()),
            Err(PluginError::InvalidNumberLength {
                expected: 8,
                found: 4
            })
        ));
    }

    #[test]
    fn rejects_garbage_cbor() {
        assert!(matches!(add(&[0xff, 0x00]), Err(PluginError::Decode(_))));
    }

    #[test]
    fn adds_and_subtracts() {
        let p = Q::new(1.0, 2.0, 3.0, 4.0);
        let q = Q::new(0.5, 0.5, 0.5, 0.5);
        let out = add(&cbor(&vec![p, q, q])).unwrap();
        assert_eq!(quaternion_from(out), Q::new(2.0, 3.0, 4.0, 5.0));

        let out = sub(&cbor(&p), &cbor(&q)).unwrap();
        assert_eq!(quaternion_from(out), Q::new(0.5, 1.5, 2.5, 3.5));
    }

    #[test]
    fn scalar_operations_keep_imaginary_parts() {
        let m = cbor(&Q::new(1.0, 2.0, 3.5, 4.0));
        let five = 5.0f64.to_le_bytes();

        let out = add_real(&m, &five).unwrap();
        assert_eq!(quaternion_from(out), Q::new(6.0, 2.0, 3.5, 4.0));
        let out = sub_real(&m, &five).unwrap();
        assert_eq!(quaternion_from(out), Q::new(-4.0, 2.0, 3.5, 4.0));
        let out = real_sub(&five, &m).unwrap();
        assert_eq!(quaternion_from(out), Q::new(4.0, 2.0, 3.5, 4.0));
    }

    #[test]
    fn reads_components() {
        let m = cbor(&Q::new(1.0, 2.0, 3.5, 4.0));
        assert_eq!(real(&m).unwrap(), 1.0f64.to_le_bytes());
        let imag_out: [f64; 3] = decode_cbor(&imag(&m).unwrap()).unwrap();
        assert_eq!(imag_out, [2.0, 3.5, 4.0]);
    }

    #[test]
    fn text_round_trip() {
        let out = parse("(1,\u{2212}2,3.5)".as_bytes()).unwrap();
        let q = quaternion_from(out);
        assert_eq!(q, Q::new(1.0, -2.0, 3.5, 0.0));
        assert_eq!(repr(&cbor(&q)).unwrap(), b"(1,-2,3.5,0)");

        assert!(matches!(
            parse(b"(1,2"),
            Err(PluginError::Parse(ParseQuaternionError::InvalidFormat))
        ));
        assert!(matches!(parse(&[0xc3, 0x28]), Err(PluginError::Utf8(_))));
    }
}

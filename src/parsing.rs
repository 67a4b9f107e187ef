use std::error::Error as StdError;
use std::str::FromStr;

use quat_algebra_base::Component;
use thiserror::Error;

use crate::Quaternion;

const OPEN: char = '(';
const CLOSE: char = ')';
const SEPARATOR: char = ',';

#[derive(Debug, Error)]
pub enum ParseQuaternionError {
    #[error("Invalid quaternion format")]
    InvalidFormat,
    #[error("A quaternion has at most 4 components, found {0}")]
    TooManyComponents(usize),
    #[error("Invalid component at index {index}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Parses the `Display` form `(re,i,j,k)`.
///
/// Parentheses and whitespace around components are optional, and one to
/// four components are accepted with missing trailing ones set to zero, the
/// same way partial construction works. `()` is the zero quaternion.
impl<T> FromStr for Quaternion<T>
where
    T: Component + FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    type Err = ParseQuaternionError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        let inner = match (src.strip_prefix(OPEN), src.ends_with(CLOSE)) {
            (Some(rest), true) => &rest[..rest.len() - CLOSE.len_utf8()],
            (None, false) => src,
            // unbalanced parenthesis
            _ => return Err(ParseQuaternionError::InvalidFormat),
        };
        let inner = inner.trim();
        if inner.is_empty() {
            return if src.is_empty() {
                Err(ParseQuaternionError::InvalidFormat)
            } else {
                Ok(Quaternion::zero())
            };
        }

        let mut components = [T::zero(); 4];
        let mut count = 0;
        for (index, part) in inner.split(SEPARATOR).enumerate() {
            if index >= components.len() {
                count = index + 1;
                continue;
            }
            components[index] = part
                .trim()
                .parse::<T>()
                .map_err(|err| ParseQuaternionError::InvalidComponent {
                    index,
                    source: Box::new(err),
                })?;
            count = index + 1;
        }
        if count > components.len() {
            return Err(ParseQuaternionError::TooManyComponents(count));
        }

        let [re, i, j, k] = components;
        Ok(Quaternion::new(re, i, j, k))
    }
}

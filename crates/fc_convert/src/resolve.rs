//! Walks wrapper layers down to a concrete field, then applies a capability.
//!
//! The two directions treat an empty layer differently. Reading an empty
//! layer yields `""`. Writing into one stores a default value first and
//! continues into it, so the caller's wrapper is populated even when the
//! following parse fails.

use alloc::string::String;

use crate::capability;
use crate::error::ConvertError;
use crate::field::Field;

// -----------------------------------------------------------------------------
// Write

/// Parses `token` into `field`, allocating through empty wrappers.
pub(crate) fn unmarshal(field: &mut dyn Field, token: &str) -> Result<(), ConvertError> {
    let origin = field.type_path();
    unmarshal_layer(field, token, origin)
}

fn unmarshal_layer(
    field: &mut dyn Field,
    token: &str,
    origin: &'static str,
) -> Result<(), ConvertError> {
    if let Some(wrapper) = field.as_wrapper_mut() {
        if wrapper.is_empty() {
            log::trace!(
                "allocating default `{}` into empty `{origin}`",
                wrapper.inner_type_path()
            );
        }
        return unmarshal_layer(wrapper.get_or_insert_default(), token, origin);
    }

    match capability::parser(field) {
        Some(parser) => parser.unmarshal_text(token).map_err(ConvertError::from),
        None => Err(ConvertError::Unsupported {
            from: "string",
            to: origin,
            reason: "does not implement TypeUnmarshaller",
        }),
    }
}

// -----------------------------------------------------------------------------
// Read

/// Renders `field` as text. An empty wrapper anywhere on the way renders as
/// the empty string.
pub(crate) fn marshal(field: &dyn Field) -> Result<String, ConvertError> {
    let origin = field.type_path();

    let mut current = field;
    while let Some(wrapper) = current.as_wrapper() {
        match wrapper.get() {
            Some(inner) => current = inner,
            None => return Ok(String::new()),
        }
    }

    match capability::renderer(current) {
        Some(renderer) => renderer.render().map_err(ConvertError::from),
        None => Err(ConvertError::Unsupported {
            from: origin,
            to: "string",
            reason: "implements neither TypeMarshaller nor Display",
        }),
    }
}

use tonic::metadata::{MetadataMap, MetadataValue};

use crate::{ArithError, REQUEST_ID_HEADER};

/// Per-call context forwarded to the service as gRPC metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    request_id: Option<String>,
}

impl CallContext {
    /// Context carrying `request_id`. An empty id means "no id".
    #[must_use]
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        Self {
            request_id: (!request_id.is_empty()).then_some(request_id),
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Write this context into outgoing metadata.
    ///
    /// # Errors
    /// Returns [`ArithError::Internal`] if the id is not a valid metadata value.
    pub fn attach(&self, metadata: &mut MetadataMap) -> Result<(), ArithError> {
        if let Some(id) = &self.request_id {
            let value = MetadataValue::try_from(id.as_str())
                .map_err(|e| ArithError::Internal(format!("invalid request id: {e}")))?;
            metadata.insert(REQUEST_ID_HEADER, value);
        }
        Ok(())
    }

    /// Read the context from incoming metadata. Missing or non-ASCII values
    /// yield an empty context.
    #[must_use]
    pub fn extract(metadata: &MetadataMap) -> Self {
        metadata
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map_or_else(Self::default, Self::with_request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_travels_through_metadata() {
        let ctx = CallContext::with_request_id("0123456789abcdef");
        let mut md = MetadataMap::new();
        ctx.attach(&mut md).unwrap();

        assert_eq!(md.get(REQUEST_ID_HEADER).unwrap().to_str().unwrap(), "0123456789abcdef");
        assert_eq!(CallContext::extract(&md), ctx);
    }

    #[test]
    fn empty_id_is_not_attached() {
        let ctx = CallContext::with_request_id("");
        assert_eq!(ctx.request_id(), None);

        let mut md = MetadataMap::new();
        ctx.attach(&mut md).unwrap();
        assert!(md.is_empty());
        assert_eq!(CallContext::extract(&md), CallContext::default());
    }

    #[test]
    fn invalid_metadata_value_is_an_internal_error() {
        let ctx = CallContext::with_request_id("line\nbreak");
        let err = ctx.attach(&mut MetadataMap::new()).unwrap_err();
        assert!(matches!(err, ArithError::Internal(_)));
    }
}

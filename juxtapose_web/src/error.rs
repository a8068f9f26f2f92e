// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Why a comparator could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// No element matched the container selector.
    #[error("no comparator container matches `{0}`")]
    ContainerNotFound(String),
    /// The container has no `img.left-image` child.
    #[error("comparator container has no left image (`{}`)", crate::LEFT_IMAGE_SELECTOR)]
    MissingLeftImage,
    /// The container has no `img.right-image` child.
    #[error("comparator container has no right image (`{}`)", crate::RIGHT_IMAGE_SELECTOR)]
    MissingRightImage,
    /// The same element was passed as both the left and the right image.
    #[error("left and right image must be distinct elements")]
    SameImage,
    /// The page has no `window` or `document`.
    #[error("no browser window or document available")]
    NoDocument,
    /// A DOM call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::MountError;

    #[test]
    fn messages_name_the_missing_part() {
        assert_eq!(
            MountError::ContainerNotFound(String::from(".cmp")).to_string(),
            "no comparator container matches `.cmp`"
        );
        assert_eq!(
            MountError::MissingLeftImage.to_string(),
            "comparator container has no left image (`img.left-image`)"
        );
        assert_eq!(
            MountError::MissingRightImage.to_string(),
            "comparator container has no right image (`img.right-image`)"
        );
    }
}

//! Error types for the site.

/// Gallery setup failures. The gallery renders nothing when one of these occurs.
/// The modal markup is rendered by the gallery component itself, so only the
/// image list can be misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery has no images")]
    EmptyGallery,
}

/// Contact form validation failures. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Bitte füllen Sie alle erforderlichen Felder aus.")]
    MissingRequired,

    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein.")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_error_display() {
        assert_eq!(GalleryError::EmptyGallery.to_string(), "gallery has no images");
    }

    #[test]
    fn form_error_display_is_user_facing() {
        assert_eq!(
            FormError::MissingRequired.to_string(),
            "Bitte füllen Sie alle erforderlichen Felder aus."
        );
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Bitte geben Sie eine gültige E-Mail-Adresse ein."
        );
    }
}

use teloxide::types::LinkPreviewOptions;

pub mod notification_view;
pub mod pair_message;
pub mod query_view;

/// Pair messages link to DexScreener, the preview card would bury the numbers
pub fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_preview_is_disabled() {
        let options = disabled_link_preview();

        assert!(options.is_disabled);
        assert_eq!(options.url, None);
    }
}

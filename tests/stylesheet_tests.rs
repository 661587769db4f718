#[cfg(test)]
pub mod stylesheet_tests {
    const STYLESHEET: &str = include_str!("../style/main.css");

    fn reduced_motion_block() -> &'static str {
        let start = STYLESHEET
            .find("@media (prefers-reduced-motion: reduce)")
            .unwrap();
        let rest = &STYLESHEET[start..];
        let end = rest.find("\n}").unwrap();
        &rest[..end]
    }

    #[test]
    fn test_jello_keyframes_defined_success() {
        assert!(STYLESHEET.contains(".animate__jello"));
        assert!(STYLESHEET.contains("@keyframes jello"));
    }

    #[test]
    fn test_reduced_motion_still_ends_animation_success() {
        let block = reduced_motion_block();

        assert!(block.contains("animation-duration: 1ms"));
        assert!(block.contains("animation-iteration-count: 1"));
        assert!(!block.contains("animation: none"));
    }
}

#[cfg(test)]
mod tests {
    use dailyboard_core::ServiceState;
    use dailyboard_scraper::extract::transit::parse_service_status;

    #[test]
    fn test_normal_operation() {
        let status = parse_service_status("(○)平常運転\n現在、平常通り運転しています。").unwrap();

        assert_eq!(status.heading, "平常運転");
        assert_eq!(status.comment, "現在、平常通り運転しています。");
        assert_eq!(status.state, ServiceState::Normal);
        assert_eq!(status.state.icon(), "static/img/circle.png");
    }

    #[test]
    fn test_delayed() {
        let status = parse_service_status("(!)列車遅延\n一部列車に遅れが出ています。").unwrap();

        assert_eq!(status.heading, "列車遅延");
        assert_eq!(status.state, ServiceState::Delayed);
        assert_eq!(status.state.icon(), "static/img/alert.png");
    }

    #[test]
    fn test_unrecognized_heading_is_unknown() {
        let status =
            parse_service_status("(!)強風のため運転見合わせ\n運転再開は未定です。").unwrap();

        assert_eq!(status.heading, "強風のため運転見合わせ");
        assert_eq!(status.state, ServiceState::Unknown);
        assert_eq!(status.state.icon(), "static/img/alert.png");
    }

    #[test]
    fn test_skip_counts_characters_not_bytes() {
        // Three multibyte marker glyphs before the heading
        let status = parse_service_status("●○●平常運転\nコメント").unwrap();

        assert_eq!(status.heading, "平常運転");
    }

    #[test]
    fn test_single_line_block_is_rejected() {
        assert!(parse_service_status("(○)平常運転").is_err());
    }

    #[test]
    fn test_empty_block_is_rejected() {
        assert!(parse_service_status("").is_err());
        assert!(parse_service_status("(○)").is_err());
    }
}

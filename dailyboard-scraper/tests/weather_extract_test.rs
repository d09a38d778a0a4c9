#[cfg(test)]
mod tests {
    use dailyboard_core::ForecastIcon;
    use dailyboard_scraper::extract::weather::{parse_forecast, weather_regions, WeatherRegions};
    use dailyboard_scraper::fetch::PageDocument;

    fn regions(hours: &str, not_current: &[&str], conditions: &str, temperatures: &str) -> WeatherRegions {
        WeatherRegions {
            hours: hours.to_string(),
            not_current: not_current.iter().map(|s| s.to_string()).collect(),
            conditions: conditions.to_string(),
            temperatures: temperatures.to_string(),
        }
    }

    #[test]
    fn test_one_slot_per_hour_in_page_order() {
        let slots = parse_forecast(&regions(
            "00 03 06 09",
            &["00", "03"],
            "天気 晴れ 曇り 雨 雪",
            "10 11 12 13",
        ));

        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].display_time, "時");
        assert_eq!(slots[1].display_time, "3時");
        assert_eq!(slots[2].display_time, "6時");
        assert_eq!(slots[3].display_time, "9時");
        assert_eq!(slots[0].condition, "晴れ");
        assert_eq!(slots[3].temperature, "13");
        assert_eq!(slots.iter().filter(|s| s.is_current).count(), 1);
    }

    #[test]
    fn test_current_is_first_hour_not_marked_past() {
        let slots = parse_forecast(&regions(
            "00 03 06 09",
            &["00", "03"],
            "天気 晴れ 曇り 雨 雪",
            "10 11 12 13",
        ));

        assert!(!slots[0].is_current);
        assert!(!slots[1].is_current);
        assert!(slots[2].is_current);
        assert!(!slots[3].is_current);
    }

    #[test]
    fn test_all_hours_past_means_no_current_slot() {
        let slots = parse_forecast(&regions(
            "00 03 06",
            &["00", "03", "06"],
            "天気 晴れ 曇り 雨",
            "10 11 12",
        ));

        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| !s.is_current));
    }

    #[test]
    fn test_leading_zeros_stripped_from_display_time() {
        let slots = parse_forecast(&regions(
            "09 00 10",
            &[],
            "天気 晴れ 曇り 雨",
            "10 11 12",
        ));

        assert_eq!(slots[0].display_time, "9時");
        assert_eq!(slots[1].display_time, "時");
        assert_eq!(slots[2].display_time, "10時");
    }

    #[test]
    fn test_sequences_truncate_to_shortest() {
        let slots = parse_forecast(&regions(
            "00 03 06 09",
            &[],
            "天気 晴れ 曇り 雨 雪",
            "10 11",
        ));

        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_condition_header_token_is_dropped() {
        let slots = parse_forecast(&regions("06", &[], "天気 小雨", "18"));

        assert_eq!(slots[0].condition, "小雨");
    }

    #[test]
    fn test_icon_priority_sun_beats_rain() {
        assert_eq!(ForecastIcon::classify("晴のち雨"), ForecastIcon::Sun);
        assert_eq!(ForecastIcon::classify("雨のち晴"), ForecastIcon::Sun);
    }

    #[test]
    fn test_icon_classification_order() {
        assert_eq!(ForecastIcon::classify("曇り時々雨"), ForecastIcon::Cloud);
        assert_eq!(ForecastIcon::classify("大雨"), ForecastIcon::Rain);
        assert_eq!(ForecastIcon::classify("雪"), ForecastIcon::Snow);
        assert_eq!(ForecastIcon::classify("みぞれ"), ForecastIcon::Snow);
        assert_eq!(ForecastIcon::classify("霧"), ForecastIcon::Unknown);
    }

    #[test]
    fn test_regions_from_rendered_page() {
        let doc = PageDocument::parse(
            r#"<html><body>
            <div class="hour"><span class="past">00</span><span class="past">03</span><span>06</span></div>
            <div class="weather">天気 晴れ 曇り 雨</div>
            <div class="temperature">10 11 12</div>
            </body></html>"#,
        );

        let regions = weather_regions(&doc).unwrap();
        let slots = parse_forecast(&regions);

        assert_eq!(regions.not_current, vec!["00", "03"]);
        assert_eq!(slots.len(), 3);
        assert!(slots[2].is_current);
    }

    #[test]
    fn test_missing_region_is_an_error() {
        let doc = PageDocument::parse(
            r#"<html><body><div class="hour">00 03</div></body></html>"#,
        );

        assert!(weather_regions(&doc).is_err());
    }
}

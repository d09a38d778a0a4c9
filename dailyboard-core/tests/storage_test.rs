#[cfg(test)]
mod tests {
    use dailyboard_core::storage::{TrainTargets, VocabularyPairs, WeatherTargets};
    use dailyboard_core::{TrainTarget, VocabularyPair, WeatherTarget};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn db_path(dir: &TempDir) -> PathBuf {
        dir.path().join("board.db")
    }

    #[test]
    fn test_weather_insert_then_select_all_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut repo = WeatherTargets::open(db_path(&dir)).unwrap();

        let targets = vec![
            WeatherTarget {
                place: "東京".to_string(),
                url: "http://example.com/tokyo".to_string(),
            },
            WeatherTarget {
                place: "横浜".to_string(),
                url: "http://example.com/yokohama".to_string(),
            },
        ];
        assert_eq!(repo.insert_all(&targets).unwrap(), 2);

        let rows = repo.select_all().unwrap();
        assert_eq!(rows, targets);
    }

    #[test]
    fn test_weather_delete_by_place() {
        let dir = TempDir::new().unwrap();
        let mut repo = WeatherTargets::open(db_path(&dir)).unwrap();

        repo.insert_all(&[
            WeatherTarget {
                place: "東京".to_string(),
                url: "http://example.com/tokyo".to_string(),
            },
            WeatherTarget {
                place: "横浜".to_string(),
                url: "http://example.com/yokohama".to_string(),
            },
        ])
        .unwrap();

        assert_eq!(repo.delete_by_place("東京").unwrap(), 1);
        let rows = repo.select_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].place, "横浜");
    }

    #[test]
    fn test_train_insert_then_select_all_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut repo = TrainTargets::open(db_path(&dir)).unwrap();

        let targets = vec![TrainTarget {
            route: "山手線".to_string(),
            url: "http://example.com/yamanote".to_string(),
        }];
        repo.insert_all(&targets).unwrap();

        assert_eq!(repo.select_all().unwrap(), targets);
    }

    #[test]
    fn test_empty_registry_selects_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let repo = TrainTargets::open(db_path(&dir)).unwrap();

        assert!(repo.select_all().unwrap().is_empty());
    }

    #[test]
    fn test_vocabulary_random_sample_is_bounded_and_drawn_from_store() {
        let dir = TempDir::new().unwrap();
        let mut repo = VocabularyPairs::open(db_path(&dir)).unwrap();

        let pairs: Vec<VocabularyPair> = [
            ("apple", "りんご"),
            ("book", "本"),
            ("cat", "猫"),
            ("dog", "犬"),
            ("egg", "卵"),
        ]
        .iter()
        .map(|(english, japanese)| VocabularyPair {
            english: english.to_string(),
            japanese: japanese.to_string(),
        })
        .collect();
        repo.insert_all(&pairs).unwrap();

        let sample = repo.select_random_sample(3).unwrap();
        assert_eq!(sample.len(), 3);
        for drawn in &sample {
            assert!(pairs.contains(drawn));
        }
    }

    #[test]
    fn test_vocabulary_random_sample_of_empty_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = VocabularyPairs::open(db_path(&dir)).unwrap();

        assert!(repo.select_random_sample(3).unwrap().is_empty());
    }

    #[test]
    fn test_collections_share_one_database_file() {
        let dir = TempDir::new().unwrap();

        let mut weather = WeatherTargets::open(db_path(&dir)).unwrap();
        weather
            .insert_all(&[WeatherTarget {
                place: "東京".to_string(),
                url: "http://example.com/tokyo".to_string(),
            }])
            .unwrap();
        drop(weather);

        let mut vocabulary = VocabularyPairs::open(db_path(&dir)).unwrap();
        vocabulary
            .insert_all(&[VocabularyPair {
                english: "apple".to_string(),
                japanese: "りんご".to_string(),
            }])
            .unwrap();
        drop(vocabulary);

        let weather = WeatherTargets::open(db_path(&dir)).unwrap();
        assert_eq!(weather.select_all().unwrap().len(), 1);
        let vocabulary = VocabularyPairs::open(db_path(&dir)).unwrap();
        assert_eq!(vocabulary.select_all().unwrap().len(), 1);
    }
}

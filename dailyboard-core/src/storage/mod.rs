mod sqlite;

pub use sqlite::{TrainTargets, VocabularyPairs, WeatherTargets};

//! Defines the [`Essay`] type — short diary-style posts with a weather
//! stamp. The weather kind is a closed enum so the rendering layer never
//! sees a value it doesn't have an icon for; an out-of-set kind in the
//! fixtures fails at load time.

use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
}

/// A weather kind paired with the temperature (°C) at writing time.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Weather {
    #[serde(rename = "type")]
    pub kind: WeatherKind,
    pub temperature: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Essay {
    pub id: u64,
    pub content: String,
    pub date: NaiveDateTime,
    pub weather: Weather,
    pub author: String,
    pub avatar: String,
    pub likes: u32,
    pub is_liked: bool,
}

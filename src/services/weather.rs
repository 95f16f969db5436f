use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::settings::WeatherConfig;
use crate::services::http_client;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
    #[serde(default)]
    pub is_day: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<Option<i32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    daily: Option<DailyBlock>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub precipitation: Option<f64>,
    pub weathercode: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourForecast {
    pub time: NaiveDateTime,
    pub temperature: Option<f64>,
    pub precipitation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: Option<CurrentWeather>,
    pub hours: Vec<HourForecast>,
    pub days: Vec<DayForecast>,
}

pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: FORECAST_URL.to_string(),
        })
    }

    pub fn fetch(&self, config: &WeatherConfig, now: NaiveDateTime) -> Result<WeatherReport> {
        log::debug!(
            "fetching forecast for {} ({}, {})",
            config.location_name,
            config.latitude,
            config.longitude
        );
        let body = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", config.latitude.to_string()),
                ("longitude", config.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", "temperature_2m,precipitation_probability".to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,weathercode"
                        .to_string(),
                ),
                ("timezone", config.timezone.clone()),
            ])
            .send()
            .context("Requesting forecast")?
            .error_for_status()
            .context("Forecast service returned an error")?
            .text()
            .context("Reading forecast response")?;

        parse_forecast(&body, now, config.hours_ahead)
    }
}

/// Decode a forecast body, keeping hourly points from the current hour on.
pub fn parse_forecast(body: &str, now: NaiveDateTime, hours_ahead: usize) -> Result<WeatherReport> {
    let resp: ForecastResponse = serde_json::from_str(body).context("Parsing forecast")?;

    let hourly = resp.hourly.unwrap_or_default();
    let current_hour = now
        .date()
        .and_hms_opt(now.hour(), 0, 0)
        .unwrap_or(now);
    let hours = hourly
        .time
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let time = NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M").ok()?;
            Some(HourForecast {
                time,
                temperature: hourly.temperature_2m.get(i).copied().flatten(),
                precipitation: hourly.precipitation_probability.get(i).copied().flatten(),
            })
        })
        .filter(|h| h.time >= current_hour)
        .take(hours_ahead)
        .collect();

    let daily = resp.daily.unwrap_or_default();
    let days = daily
        .time
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let date = NaiveDate::parse_from_str(t, "%Y-%m-%d").ok()?;
            Some(DayForecast {
                date,
                max: daily.temperature_2m_max.get(i).copied().flatten(),
                min: daily.temperature_2m_min.get(i).copied().flatten(),
                precipitation: daily.precipitation_probability_max.get(i).copied().flatten(),
                weathercode: daily.weathercode.get(i).copied().flatten(),
            })
        })
        .collect();

    Ok(WeatherReport {
        current: resp.current_weather,
        hours,
        days,
    })
}

/// Short description of a WMO weather interpretation code.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

pub fn icon(code: i32, is_day: bool) -> &'static str {
    match code {
        0 | 1 if is_day => "☀",
        0 | 1 => "☾",
        2 => "⛅",
        3 | 45 | 48 => "☁",
        51..=67 | 80..=82 => "☂",
        71..=77 | 85 | 86 => "❄",
        95..=99 => "⚡",
        _ => "·",
    }
}

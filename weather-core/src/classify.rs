//! Static lookup tables from WMO weather codes to display facts.
//!
//! Description, icon and background are three separate tables and do not
//! share groupings: fog (45, 48) has a description and an icon but falls
//! through to the default background.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

const DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Rime fog"),
    (51, "Light drizzle"),
    (61, "Light rain"),
    (71, "Light snow"),
    (80, "Rain showers"),
    (95, "Thunderstorm"),
];

const UNKNOWN_DESCRIPTION: &str = "Unknown";

const ICONS: &[(&[i32], Icon)] = &[
    (&[0, 1], Icon::Sun),
    (&[2, 3], Icon::Cloud),
    (&[51, 61, 80], Icon::Rain),
    (&[71], Icon::Snowflake),
    (&[45, 48], Icon::Fog),
    (&[95], Icon::Lightning),
];

const BACKGROUNDS: &[(&[i32], Background)] = &[
    (&[0, 1], Background::Sunny),
    (&[2, 3], Background::Cloudy),
    (&[51, 61, 80], Background::Rainy),
    (&[71], Background::Snowy),
    (&[95], Background::Stormy),
];

/// Human-readable condition for a weather code, `"Unknown"` when unmapped.
pub fn describe(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_DESCRIPTION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sun,
    Cloud,
    Fog,
    Rain,
    Snowflake,
    Lightning,
    Wind,
}

impl Icon {
    pub fn for_code(code: i32) -> Self {
        ICONS
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Wind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Cloud => "cloud",
            Icon::Fog => "fog",
            Icon::Rain => "rain",
            Icon::Snowflake => "snowflake",
            Icon::Lightning => "lightning",
            Icon::Wind => "wind",
        }
    }

    /// Terminal glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::Cloud => "☁",
            Icon::Fog => "🌫",
            Icon::Rain => "🌧",
            Icon::Snowflake => "❄",
            Icon::Lightning => "🌩",
            Icon::Wind => "🌬",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    #[default]
    Default,
}

impl Background {
    pub fn for_code(code: i32) -> Self {
        BACKGROUNDS
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map(|(_, bg)| *bg)
            .unwrap_or_default()
    }

    /// Background for an optional code; nothing displayed means the default.
    pub fn for_optional_code(code: Option<i32>) -> Self {
        code.map(Self::for_code).unwrap_or_default()
    }

    /// Gradient stops as `(from, to)` colour names.
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Background::Sunny => ("yellow-200", "blue-300"),
            Background::Cloudy => ("gray-300", "blue-200"),
            Background::Rainy => ("blue-400", "blue-700"),
            Background::Snowy => ("sky-100", "blue-200"),
            Background::Stormy => ("indigo-400", "purple-600"),
            Background::Default => ("indigo-300", "slate-400"),
        }
    }
}

/// The three display facts for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub description: &'static str,
    pub icon: Icon,
    pub background: Background,
}

pub fn classify(code: i32) -> Classification {
    Classification {
        description: describe(code),
        icon: Icon::for_code(code),
        background: Background::for_code(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorm() {
        let c = classify(95);
        assert_eq!(c.description, "Thunderstorm");
        assert_eq!(c.icon, Icon::Lightning);
        assert_eq!(c.background, Background::Stormy);
        assert_eq!(c.background.gradient(), ("indigo-400", "purple-600"));
    }

    #[test]
    fn unmapped_code_uses_default_rows() {
        let c = classify(999);
        assert_eq!(c.description, "Unknown");
        assert_eq!(c.icon, Icon::Wind);
        assert_eq!(c.background, Background::Default);
        assert_eq!(c.background.gradient(), ("indigo-300", "slate-400"));
    }

    #[test]
    fn fog_has_icon_but_no_background() {
        for code in [45, 48] {
            assert_eq!(Icon::for_code(code), Icon::Fog);
            assert_eq!(Background::for_code(code), Background::Default);
        }
        assert_eq!(describe(45), "Fog");
        assert_eq!(describe(48), "Rime fog");
    }

    #[test]
    fn grouped_codes_share_icon_and_background() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(1), "Mainly clear");
        assert_eq!(Icon::for_code(1), Icon::Sun);
        assert_eq!(Background::for_code(0), Background::Sunny);

        assert_eq!(describe(3), "Overcast");
        assert_eq!(Icon::for_code(2), Icon::Cloud);

        for code in [51, 61, 80] {
            assert_eq!(Icon::for_code(code), Icon::Rain);
            assert_eq!(Background::for_code(code), Background::Rainy);
        }
        assert_eq!(describe(80), "Rain showers");

        assert_eq!(classify(71).icon, Icon::Snowflake);
        assert_eq!(classify(71).background.gradient(), ("sky-100", "blue-200"));
    }

    #[test]
    fn codes_missing_from_description_table_are_unknown() {
        // 53 and 63 are valid WMO codes but not in the table.
        assert_eq!(describe(53), "Unknown");
        assert_eq!(describe(63), "Unknown");
        assert_eq!(Icon::for_code(63), Icon::Wind);
    }

    #[test]
    fn no_weather_means_default_background() {
        assert_eq!(Background::for_optional_code(None), Background::Default);
        assert_eq!(Background::for_optional_code(Some(1)), Background::Sunny);
    }
}

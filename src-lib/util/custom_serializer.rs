// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

/// Serialize a u32-packed RGB color as a six digit hex string, because editing a decimal u32 by hand is miserable.
pub mod rgb_color {
    use serde::{Deserialize, Deserializer, Serializer};

    const MAX_COLOR: u32 = 0x00FFFFFF;

    pub fn serialize<S>(color: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:06X}", color & MAX_COLOR))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.trim_start_matches('#');
        let color = u32::from_str_radix(s, 16).map_err(serde::de::Error::custom)?;
        if color > MAX_COLOR {
            return Err(serde::de::Error::custom(format!("color {s} does not fit in RRGGBB")));
        }
        Ok(color)
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        #[serde(with = "super::rgb_color")]
        color: u32,
    }

    #[test]
    fn serializes_as_hex() {
        let serialized = toml::to_string(&Wrapper { color: 0x00FF8000 }).unwrap();
        assert_eq!(serialized.trim(), "color = \"FF8000\"");
    }

    #[test]
    fn accepts_leading_hash() {
        let wrapper: Wrapper = toml::from_str("color = \"#00ff7f\"").unwrap();
        assert_eq!(wrapper.color, 0x0000FF7F);
    }

    #[test]
    fn rejects_alpha() {
        assert!(toml::from_str::<Wrapper>("color = \"B2FF0000\"").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(toml::from_str::<Wrapper>("color = \"red\"").is_err());
    }
}

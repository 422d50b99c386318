use crate::error::{StoregenError, StoregenResult};

/// RGBA8 color. Serialized as a hex token (`#rrggbb` or `#rrggbbaa`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color token: `#rgb`, `#rrggbb`, `#rrggbbaa`, or one of the
    /// named colors the source artwork uses (`white`, `black`).
    pub fn parse(token: &str) -> StoregenResult<Self> {
        match token {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = token
            .strip_prefix('#')
            .ok_or_else(|| StoregenError::color(format!("unsupported color token '{token}'")))?;

        let channel = |s: &str| -> StoregenResult<u8> {
            u8::from_str_radix(s, 16)
                .map_err(|_| StoregenError::color(format!("bad hex digits in '{token}'")))
        };

        match hex.len() {
            3 => {
                let nibble = |s: &str| -> StoregenResult<u8> {
                    let v = channel(s)?;
                    Ok(v << 4 | v)
                };
                Ok(Self::rgb(
                    nibble(&hex[0..1])?,
                    nibble(&hex[1..2])?,
                    nibble(&hex[2..3])?,
                ))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(StoregenError::color(format!(
                "color token '{token}' must be #rgb, #rrggbb or #rrggbbaa"
            ))),
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Premultiplied RGBA8 form, matching the pixmap byte layout.
    pub fn premul(&self) -> [u8; 4] {
        let af = u16::from(self.a) + 1;
        let premul = |c: u8| -> u8 { ((u16::from(c) * af) >> 8) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl std::str::FromStr for Color {
    type Err = StoregenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = StoregenError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        if c.a == 255 {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }
}

//! Shared types for mirror documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A JSON object. Records deserialize through this so that the array
/// form serde derives also accept (`[start, end, absorption]`) is refused.
type JsonObject = Map<String, Value>;

/// A 2D point, serialized as a two-element `[x, y]` array.
///
/// Integer inputs are accepted and widened to `f64`, so a point read
/// from `[540, 960]` serializes back as `[540.0, 960.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A reflective line segment.
///
/// Only a JSON object with `start_pos`, `end_pos`, and
/// `absorption_factor` keys is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct Mirror {
    /// First endpoint.
    pub start_pos: Point,

    /// Second endpoint.
    pub end_pos: Point,

    /// Fraction of incoming light absorbed on reflection
    /// (0 = perfect mirror, 1 = nothing is reflected).
    ///
    /// Kept as the JSON number it was read as, so an integer stays an
    /// integer on output.
    pub absorption_factor: Number,
}

impl Mirror {
    /// Create a new mirror.
    #[must_use]
    pub const fn new(start_pos: Point, end_pos: Point, absorption_factor: Number) -> Self {
        Self {
            start_pos,
            end_pos,
            absorption_factor,
        }
    }

    /// Return a copy with `f` applied to both endpoints.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            start_pos: f(self.start_pos),
            end_pos: f(self.end_pos),
            absorption_factor: self.absorption_factor.clone(),
        }
    }
}

/// Keyed fields of a [`Mirror`].
#[derive(Deserialize)]
struct MirrorFields {
    start_pos: Point,
    end_pos: Point,
    absorption_factor: Number,
}

impl TryFrom<JsonObject> for Mirror {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let fields: MirrorFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self::new(
            fields.start_pos,
            fields.end_pos,
            fields.absorption_factor,
        ))
    }
}

/// Which coordinate space a document's points live in.
///
/// Serialized as the lowercase tag `"pixels"` or `"fractions"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordFormat {
    /// Raw pixel coordinates.
    Pixels,
    /// Coordinates divided by a reference resolution.
    Fractions,
}

/// A complete mirror document as stored on disk.
///
/// Must be a JSON object. Unknown keys are ignored on input and not
/// reproduced on output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct MirrorDocument {
    /// Optional coordinate space tag. Absent documents stay absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coord_format: Option<CoordFormat>,

    /// Mirrors in file order.
    pub mirrors: Vec<Mirror>,
}

impl MirrorDocument {
    /// Create an untagged document.
    #[must_use]
    pub const fn new(mirrors: Vec<Mirror>) -> Self {
        Self {
            coord_format: None,
            mirrors,
        }
    }

    /// Tag the document with a coordinate format.
    #[must_use]
    pub fn with_coord_format(mut self, format: CoordFormat) -> Self {
        self.coord_format = Some(format);
        self
    }
}

/// Keyed fields of a [`MirrorDocument`].
#[derive(Deserialize)]
struct DocumentFields {
    #[serde(default)]
    coord_format: Option<CoordFormat>,
    mirrors: Vec<Mirror>,
}

impl TryFrom<JsonObject> for MirrorDocument {
    type Error = serde_json::Error;

    fn try_from(object: JsonObject) -> Result<Self, Self::Error> {
        let fields: DocumentFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            coord_format: fields.coord_format,
            mirrors: fields.mirrors,
        })
    }
}

/// A pixel resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Width of the portrait reference frame fractions are relative to.
    pub const REFERENCE_WIDTH: u32 = 1080;

    /// Height of the portrait reference frame fractions are relative to.
    pub const REFERENCE_HEIGHT: u32 = 1920;

    /// The 1080×1920 reference frame.
    pub const REFERENCE: Self = Self::new(Self::REFERENCE_WIDTH, Self::REFERENCE_HEIGHT);

    /// Create a new resolution.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Divide coordinates by [`Resolution::REFERENCE`] when `true`;
    /// copy them unchanged as floats when `false`.
    pub to_fractions: bool,
}

/// Errors that can occur while converting a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The document is tagged as fractional and would be divided again.
    #[error("document is already in fractional coordinates")]
    AlreadyFractional,

    /// The document has no `coord_format` tag, so its coordinate space
    /// is unknown.
    #[error("document has no coord_format tag")]
    MissingCoordFormat,
}

//! Render requests.

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

use formkit::{AttrValue, Attrs};
use regex::Regex;

static PART_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(input|label)-([A-Za-z_:][-A-Za-z0-9_:.]*)$")
        .expect("part attribute pattern is valid")
});

/// Named partial of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Form-level errors.
    Errors,
    /// Errors, groups, controls and buttons, without the form tags.
    Body,
    /// Remaining non-button controls.
    Controls,
    /// Remaining buttons.
    Buttons,
    /// A single control pair, by lookup path.
    Control(String),
}

impl Part {
    /// Returns the name the templates use for the partial.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Errors => "errors",
            Self::Body => "body",
            Self::Controls => "controls",
            Self::Buttons => "buttons",
            Self::Control(_) => "control",
        }
    }
}

impl FromStr for Part {
    type Err = Infallible;

    /// Any name that is not a known partial is taken as a control path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "errors" => Self::Errors,
            "body" => Self::Body,
            "controls" => Self::Controls,
            "buttons" => Self::Buttons,
            path => Self::Control(path.to_string()),
        })
    }
}

/// Extra attributes for the input and the label of a rendered partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartAttrs {
    /// Attributes merged into the input.
    pub input: Attrs,
    /// Attributes merged into the label.
    pub label: Attrs,
}

impl PartAttrs {
    /// Creates empty attribute buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts loose arguments by their `input-` / `label-` prefix.
    ///
    /// Keys are matched case-insensitively; other keys are ignored.
    ///
    /// ```rust
    /// use formkit_bootstrap::PartAttrs;
    ///
    /// let args = serde_json::json!({"input-class": ["span4"], "LABEL-title": "Name", "x": 1});
    /// let attrs = PartAttrs::from_args(args.as_object().unwrap());
    /// assert!(attrs.input.contains("class"));
    /// assert_eq!(attrs.label.get_str("title"), Some("Name"));
    /// ```
    pub fn from_args(args: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut attrs = Self::new();
        for (key, value) in args {
            let (Some(captures), Some(value)) = (PART_ATTR.captures(key), AttrValue::from_json(value))
            else {
                continue;
            };
            let name = captures[2].to_string();
            if captures[1].eq_ignore_ascii_case("input") {
                attrs.input.set(name, value);
            } else {
                attrs.label.set(name, value);
            }
        }
        attrs
    }

    /// Builder method to add an input attribute.
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.input.set(key, value);
        self
    }

    /// Builder method to add a label attribute.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.label.set(key, value);
        self
    }
}

/// What a render call emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// The whole form; `attrs` are added to the form element.
    Full { attrs: Attrs },
    /// The opening form tag only.
    Begin { attrs: Attrs },
    /// Pending hidden fields and the closing form tag.
    End,
    /// A named partial.
    Part { part: Part, attrs: PartAttrs },
}

impl RenderMode {
    /// Renders the whole form.
    pub fn full() -> Self {
        Self::Full {
            attrs: Attrs::new(),
        }
    }

    /// Renders the opening tag.
    pub fn begin() -> Self {
        Self::Begin {
            attrs: Attrs::new(),
        }
    }

    /// Renders the closing tag.
    pub fn end() -> Self {
        Self::End
    }

    /// Renders a partial without extra attributes.
    pub fn part(part: Part) -> Self {
        Self::Part {
            part,
            attrs: PartAttrs::new(),
        }
    }

    /// Builds a mode from a mode name and loose arguments.
    ///
    /// No name renders the whole form with `args` as form attributes;
    /// `begin` and `end` render the tags; anything else is a partial whose
    /// arguments are sorted with [`PartAttrs::from_args`].
    pub fn from_args(mode: Option<&str>, args: &serde_json::Map<String, serde_json::Value>) -> Self {
        let attrs = || {
            args.iter()
                .filter_map(|(key, value)| Some((key.clone(), AttrValue::from_json(value)?)))
                .collect::<Attrs>()
        };
        match mode {
            None => Self::Full { attrs: attrs() },
            Some("begin") => Self::Begin { attrs: attrs() },
            Some("end") => Self::End,
            Some(name) => Self::Part {
                part: match name.parse::<Part>() {
                    Ok(part) => part,
                    Err(never) => match never {},
                },
                attrs: PartAttrs::from_args(args),
            },
        }
    }
}

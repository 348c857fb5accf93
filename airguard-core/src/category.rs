//! Overall Air Quality Categories and Guidance
//!
//! The aggregate model decodes to one of four labels. Each known label has
//! a decorated display form and a fixed guidance block:
//!
//! | Label     | Display        | Notice  |
//! |-----------|----------------|---------|
//! | Good      | Good 🟢        | Info    |
//! | Moderate  | Moderate 🟡    | Warning |
//! | Poor      | Poor 🔴        | Error   |
//! | Hazardous | Hazardous 🟣   | Error   |
//!
//! Labels outside this set are not an error. Callers show them as-is with
//! no guidance (see [`Category::from_label`]).

use core::fmt;

/// Overall air quality classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// No precautions needed
    Good,
    /// Sensitive groups should take care
    Moderate,
    /// Unhealthy, limit exposure
    Poor,
    /// Stay indoors
    Hazardous,
}

/// Alert level used to present a guidance block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Informational
    Info,
    /// Caution
    Warning,
    /// Health risk
    Error,
}

/// One line of advice: a short key and its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Advice {
    /// Topic, e.g. "Do" or "At Home"
    pub key: &'static str,
    /// What to do
    pub text: &'static str,
}

/// Fixed guidance block for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Guidance {
    /// Alert level
    pub notice: Notice,
    /// Heading line, including its marker
    pub heading: &'static str,
    /// Advice lines, in display order
    pub advice: &'static [Advice],
}

const GOOD: Guidance = Guidance {
    notice: Notice::Info,
    heading: "🟢 **Good Air Quality**",
    advice: &[
        Advice {
            key: "Do",
            text: "Enjoy all outdoor activities freely! It's a perfect time to be outside.",
        },
        Advice {
            key: "At Home",
            text: "Open windows to ventilate your home with fresh air.",
        },
        Advice {
            key: "Health",
            text: "No specific health precautions needed for anyone.",
        },
    ],
};

const MODERATE: Guidance = Guidance {
    notice: Notice::Warning,
    heading: "🟡 **Moderate Air Quality**",
    advice: &[
        Advice {
            key: "Do",
            text: "Most outdoor activities are generally fine for the majority of people.",
        },
        Advice {
            key: "Caution",
            text: "Sensitive individuals (children, elderly, those with heart/lung conditions) \
                   should reduce the intensity or duration of heavy outdoor exertion.",
        },
        Advice {
            key: "At Home",
            text: "Usually okay to ventilate, but monitor pollutant levels if sensitive.",
        },
    ],
};

const POOR: Guidance = Guidance {
    notice: Notice::Error,
    heading: "🔴 **Poor (Unhealthy) Air Quality**",
    advice: &[
        Advice {
            key: "Do",
            text: "Reduce prolonged or strenuous outdoor activities. Prioritize staying indoors.",
        },
        Advice {
            key: "Protection",
            text: "Wear an N95 or KN95 mask if going outside.",
        },
        Advice {
            key: "At Home",
            text: "Keep windows closed. Use air purifiers if available.",
        },
    ],
};

const HAZARDOUS: Guidance = Guidance {
    notice: Notice::Error,
    heading: "🟣 **Hazardous Air Quality**",
    advice: &[
        Advice {
            key: "Do",
            text: "Stay indoors. Avoid all outdoor physical activity.",
        },
        Advice {
            key: "Protection",
            text: "If unavoidable, wear a well-fitted N95 or P100 respirator.",
        },
        Advice {
            key: "At Home",
            text: "Keep windows and doors closed. Use air purifiers on high setting.",
        },
    ],
};

impl Category {
    /// All categories, best to worst
    pub const ALL: [Category; 4] = [
        Category::Good,
        Category::Moderate,
        Category::Poor,
        Category::Hazardous,
    ];

    /// Match a decoded label exactly
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Label as produced by the decoder
    pub const fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::Hazardous => "Hazardous",
        }
    }

    /// Label with its colour marker
    pub const fn display_label(self) -> &'static str {
        match self {
            Category::Good => "Good 🟢",
            Category::Moderate => "Moderate 🟡",
            Category::Poor => "Poor 🔴",
            Category::Hazardous => "Hazardous 🟣",
        }
    }

    /// Guidance block for this category
    pub const fn guidance(self) -> &'static Guidance {
        match self {
            Category::Good => &GOOD,
            Category::Moderate => &MODERATE,
            Category::Poor => &POOR,
            Category::Hazardous => &HAZARDOUS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Guidance {
    /// Write the block as text
    ///
    /// ```text
    /// 🟡 **Moderate Air Quality**
    ///
    /// - **Do:** Most outdoor activities are ...
    /// ```
    pub fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.heading)?;
        writeln!(out)?;
        for (i, advice) in self.advice.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write!(out, "- **{}:** {}", advice.key, advice.text)?;
        }
        Ok(())
    }
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_is_exact() {
        assert_eq!(Category::from_label("Moderate"), Some(Category::Moderate));
        assert_eq!(Category::from_label("moderate"), None);
        assert_eq!(Category::from_label("Unknown"), None);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Category::Good.display_label(), "Good 🟢");
        assert_eq!(Category::Moderate.display_label(), "Moderate 🟡");
        assert_eq!(Category::Poor.display_label(), "Poor 🔴");
        assert_eq!(Category::Hazardous.display_label(), "Hazardous 🟣");
    }

    #[test]
    fn notice_levels() {
        assert_eq!(Category::Good.guidance().notice, Notice::Info);
        assert_eq!(Category::Moderate.guidance().notice, Notice::Warning);
        assert_eq!(Category::Poor.guidance().notice, Notice::Error);
        assert_eq!(Category::Hazardous.guidance().notice, Notice::Error);
    }

    #[test]
    fn every_block_has_three_lines() {
        for category in Category::ALL {
            assert_eq!(category.guidance().advice.len(), 3, "{category}");
        }
    }

    #[test]
    fn render_hazardous_block() {
        let mut text = String::new();
        Category::Hazardous.guidance().render(&mut text).unwrap();
        assert_eq!(
            text,
            "🟣 **Hazardous Air Quality**\n\
             \n\
             - **Do:** Stay indoors. Avoid all outdoor physical activity.\n\
             - **Protection:** If unavoidable, wear a well-fitted N95 or P100 respirator.\n\
             - **At Home:** Keep windows and doors closed. Use air purifiers on high setting."
        );
    }
}

use std::fmt;

/// Body part depicted by an MR series
///
/// Each variant corresponds to exactly one short series code emitted by
/// the classification network (e.g. `MRWB` → [`BodyPart::WholeBody`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    HeadNeck,
    Abdomen,
    TSpine,
    Pelvis,
    CSpine,
    LSpine,
    Breast,
    UpperExt,
    Chest,
    LowerExt,
    WholeBody,
    Spine,
}

impl BodyPart {
    /// Looks up the body part for a network series code
    ///
    /// Matching is exact; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MRS" => Some(BodyPart::Head),
            "MRSH" => Some(BodyPart::HeadNeck),
            "MRA" => Some(BodyPart::Abdomen),
            "MRB" => Some(BodyPart::TSpine),
            "MRBE" => Some(BodyPart::Pelvis),
            "MRH" => Some(BodyPart::CSpine),
            "MRL" => Some(BodyPart::LSpine),
            "MRM" => Some(BodyPart::Breast),
            "MROE" => Some(BodyPart::UpperExt),
            "MRTH" => Some(BodyPart::Chest),
            "MRUE" => Some(BodyPart::LowerExt),
            "MRWB" => Some(BodyPart::WholeBody),
            "MRWS" => Some(BodyPart::Spine),
            _ => None,
        }
    }

    /// Returns the descriptive label written to output
    pub fn simple_name(&self) -> &'static str {
        match self {
            BodyPart::Head => "HEAD",
            BodyPart::HeadNeck => "HEADNECK",
            BodyPart::Abdomen => "ABDOMEN",
            BodyPart::TSpine => "TSPINE",
            BodyPart::Pelvis => "PELVIS",
            BodyPart::CSpine => "CSPINE",
            BodyPart::LSpine => "LSPINE",
            BodyPart::Breast => "BREAST",
            BodyPart::UpperExt => "UPPER_EXT",
            BodyPart::Chest => "CHEST",
            BodyPart::LowerExt => "LOWER_EXT",
            BodyPart::WholeBody => "WHOLE_BODY",
            BodyPart::Spine => "SPINE",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// How the raw network label is reported in the `prediction` field
///
/// The two modes are separate output contracts and are never mixed
/// within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelMode {
    /// Translate the network code into a [`BodyPart`] label.
    /// Unknown codes are reported as absent.
    #[default]
    BodyPart,

    /// Report the network label unchanged
    Raw,
}

impl LabelMode {
    /// Maps a raw network label to the reported prediction
    pub fn apply(&self, raw: &str) -> Option<String> {
        match self {
            LabelMode::BodyPart => BodyPart::from_code(raw).map(|bp| bp.simple_name().to_string()),
            LabelMode::Raw => Some(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("MRS", BodyPart::Head, "HEAD")]
    #[case("MRSH", BodyPart::HeadNeck, "HEADNECK")]
    #[case("MRA", BodyPart::Abdomen, "ABDOMEN")]
    #[case("MRB", BodyPart::TSpine, "TSPINE")]
    #[case("MRBE", BodyPart::Pelvis, "PELVIS")]
    #[case("MRH", BodyPart::CSpine, "CSPINE")]
    #[case("MRL", BodyPart::LSpine, "LSPINE")]
    #[case("MRM", BodyPart::Breast, "BREAST")]
    #[case("MROE", BodyPart::UpperExt, "UPPER_EXT")]
    #[case("MRTH", BodyPart::Chest, "CHEST")]
    #[case("MRUE", BodyPart::LowerExt, "LOWER_EXT")]
    #[case("MRWB", BodyPart::WholeBody, "WHOLE_BODY")]
    #[case("MRWS", BodyPart::Spine, "SPINE")]
    fn test_body_part_from_code(
        #[case] code: &str,
        #[case] expected: BodyPart,
        #[case] label: &str,
    ) {
        let body_part = BodyPart::from_code(code).unwrap();
        assert_eq!(body_part, expected);
        assert_eq!(body_part.simple_name(), label);
        assert_eq!(body_part.to_string(), label);
    }

    #[rstest]
    #[case("")]
    #[case("mrwb")]
    #[case("MRX")]
    #[case("CTWB")]
    #[case(" MRWB")]
    fn test_body_part_unknown_code(#[case] code: &str) {
        assert_eq!(BodyPart::from_code(code), None);
    }

    #[test]
    fn test_label_mode_body_part() {
        let mode = LabelMode::BodyPart;
        assert_eq!(mode.apply("MRWB"), Some("WHOLE_BODY".to_string()));
        assert_eq!(mode.apply("NOT_A_CODE"), None);
    }

    #[test]
    fn test_label_mode_raw() {
        let mode = LabelMode::Raw;
        assert_eq!(mode.apply("MRWB"), Some("MRWB".to_string()));
        assert_eq!(mode.apply("NOT_A_CODE"), Some("NOT_A_CODE".to_string()));
    }

    #[test]
    fn test_label_mode_default() {
        assert_eq!(LabelMode::default(), LabelMode::BodyPart);
    }
}

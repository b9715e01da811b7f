//! Scenario selectors and the URL templates naming the published rasters.
//!
//! The data root serves one directory per climate model; inside it, file
//! names follow `{ssp}_{period}_{crop}_{solution}_suitability.png`, with a
//! `baseline_1991_2020_` prefix for the historical reference and a
//! `_difference` suffix for the scenario-minus-baseline raster.

/// Crop whose suitability is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Maize,
    Rice,
    Wheat,
    Soybean,
    Cassava,
}

impl Crop {
    /// All crops, for UI combo boxes.
    pub const ALL: &[Crop] = &[
        Self::Maize,
        Self::Rice,
        Self::Wheat,
        Self::Soybean,
        Self::Cassava,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maize => "Maize",
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Soybean => "Soybean",
            Self::Cassava => "Cassava",
        }
    }

    /// Lowercase token used in file names.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Maize => "maize",
            Self::Rice => "rice",
            Self::Wheat => "wheat",
            Self::Soybean => "soybean",
            Self::Cassava => "cassava",
        }
    }
}

/// Shared Socioeconomic Pathway (emissions scenario).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ssp {
    Ssp126,
    Ssp245,
    Ssp370,
    Ssp585,
}

impl Ssp {
    pub const ALL: &[Ssp] = &[Self::Ssp126, Self::Ssp245, Self::Ssp370, Self::Ssp585];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssp126 => "SSP1-2.6",
            Self::Ssp245 => "SSP2-4.5",
            Self::Ssp370 => "SSP3-7.0",
            Self::Ssp585 => "SSP5-8.5",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Ssp126 => "ssp126",
            Self::Ssp245 => "ssp245",
            Self::Ssp370 => "ssp370",
            Self::Ssp585 => "ssp585",
        }
    }
}

/// Projection time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    P2021_2040,
    P2041_2060,
    P2061_2080,
    P2081_2100,
}

impl Period {
    pub const ALL: &[Period] = &[
        Self::P2021_2040,
        Self::P2041_2060,
        Self::P2061_2080,
        Self::P2081_2100,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::P2021_2040 => "2021-2040",
            Self::P2041_2060 => "2041-2060",
            Self::P2061_2080 => "2061-2080",
            Self::P2081_2100 => "2081-2100",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::P2021_2040 => "2021_2040",
            Self::P2041_2060 => "2041_2060",
            Self::P2061_2080 => "2061_2080",
            Self::P2081_2100 => "2081_2100",
        }
    }
}

/// Water management solution applied in the suitability model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solution {
    Rainfed,
    Irrigated,
}

impl Solution {
    pub const ALL: &[Solution] = &[Self::Rainfed, Self::Irrigated];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rainfed => "Rainfed",
            Self::Irrigated => "Irrigated",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Rainfed => "rainfed",
            Self::Irrigated => "irrigated",
        }
    }
}

/// Global climate model driving the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateModel {
    GfdlEsm4,
    IpslCm6aLr,
    MpiEsm12Hr,
    MriEsm20,
    Ukesm10Ll,
}

impl ClimateModel {
    pub const ALL: &[ClimateModel] = &[
        Self::GfdlEsm4,
        Self::IpslCm6aLr,
        Self::MpiEsm12Hr,
        Self::MriEsm20,
        Self::Ukesm10Ll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GfdlEsm4 => "GFDL-ESM4",
            Self::IpslCm6aLr => "IPSL-CM6A-LR",
            Self::MpiEsm12Hr => "MPI-ESM1-2-HR",
            Self::MriEsm20 => "MRI-ESM2-0",
            Self::Ukesm10Ll => "UKESM1-0-LL",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::GfdlEsm4 => "gfdl_esm4",
            Self::IpslCm6aLr => "ipsl_cm6a_lr",
            Self::MpiEsm12Hr => "mpi_esm1_2_hr",
            Self::MriEsm20 => "mri_esm2_0",
            Self::Ukesm10Ll => "ukesm1_0_ll",
        }
    }
}

macro_rules! impl_from_token {
    ($ty:ty, $what:literal) => {
        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .find(|v| v.token() == s)
                    .copied()
                    .ok_or_else(|| {
                        let tokens: Vec<&str> =
                            <$ty>::ALL.iter().map(|v| v.token()).collect();
                        format!(
                            concat!("unknown ", $what, " '{}' (expected one of: {})"),
                            s,
                            tokens.join(", ")
                        )
                    })
            }
        }
    };
}

impl_from_token!(Crop, "crop");
impl_from_token!(Ssp, "emissions scenario");
impl_from_token!(Period, "period");
impl_from_token!(Solution, "solution");
impl_from_token!(ClimateModel, "climate model");

/// Baseline window token: the historical reference is fixed.
const BASELINE: &str = "baseline_1991_2020";

/// A complete scenario selection, one per user-triggered load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub crop: Crop,
    pub ssp: Ssp,
    pub period: Period,
    pub solution: Solution,
    pub model: ClimateModel,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            crop: Crop::Maize,
            ssp: Ssp::Ssp245,
            period: Period::P2041_2060,
            solution: Solution::Rainfed,
            model: ClimateModel::GfdlEsm4,
        }
    }
}

impl Selection {
    /// URL of the projected suitability raster.
    pub fn suitability_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}_{}_{}_{}_suitability.png",
            base.trim_end_matches('/'),
            self.model.token(),
            self.ssp.token(),
            self.period.token(),
            self.crop.token(),
            self.solution.token(),
        )
    }

    /// URL of the historical baseline raster.
    pub fn baseline_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}_{}_{}_suitability.png",
            base.trim_end_matches('/'),
            self.model.token(),
            BASELINE,
            self.crop.token(),
            self.solution.token(),
        )
    }

    /// URL of the scenario-minus-baseline difference raster.
    pub fn difference_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}_{}_{}_{}_difference.png",
            base.trim_end_matches('/'),
            self.model.token(),
            self.ssp.token(),
            self.period.token(),
            self.crop.token(),
            self.solution.token(),
        )
    }

    /// Short description for logs ("maize, SSP2-4.5, 2041-2060, ...").
    pub fn describe(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.crop.label(),
            self.ssp.label(),
            self.period.label(),
            self.solution.label(),
            self.model.label(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            crop: Crop::Wheat,
            ssp: Ssp::Ssp585,
            period: Period::P2081_2100,
            solution: Solution::Irrigated,
            model: ClimateModel::Ukesm10Ll,
        }
    }

    #[test]
    fn suitability_url_template() {
        assert_eq!(
            selection().suitability_url("https://data.example.org/v2"),
            "https://data.example.org/v2/ukesm1_0_ll/ssp585_2081_2100_wheat_irrigated_suitability.png"
        );
    }

    #[test]
    fn trailing_slash_is_absorbed() {
        assert_eq!(
            selection().suitability_url("https://data.example.org/v2/"),
            selection().suitability_url("https://data.example.org/v2"),
        );
    }

    #[test]
    fn baseline_url_uses_fixed_window() {
        assert_eq!(
            selection().baseline_url("http://x"),
            "http://x/ukesm1_0_ll/baseline_1991_2020_wheat_irrigated_suitability.png"
        );
    }

    #[test]
    fn difference_url_suffix() {
        assert_eq!(
            selection().difference_url("http://x"),
            "http://x/ukesm1_0_ll/ssp585_2081_2100_wheat_irrigated_difference.png"
        );
    }

    #[test]
    fn tokens_are_lowercase_path_safe() {
        for crop in Crop::ALL {
            assert!(crop.token().chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
        for model in ClimateModel::ALL {
            assert!(model
                .token()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn tokens_parse_back() {
        assert_eq!("maize".parse::<Crop>().unwrap(), Crop::Maize);
        assert_eq!("ssp370".parse::<Ssp>().unwrap(), Ssp::Ssp370);
        assert_eq!("2061_2080".parse::<Period>().unwrap(), Period::P2061_2080);
        assert_eq!("irrigated".parse::<Solution>().unwrap(), Solution::Irrigated);
        assert_eq!(
            "mri_esm2_0".parse::<ClimateModel>().unwrap(),
            ClimateModel::MriEsm20
        );

        let err = "teff".parse::<Crop>().unwrap_err();
        assert!(err.contains("teff"));
        assert!(err.contains("maize"));
    }

    #[test]
    fn all_lists_cover_every_variant() {
        assert_eq!(Crop::ALL.len(), 5);
        assert_eq!(Ssp::ALL.len(), 4);
        assert_eq!(Period::ALL.len(), 4);
        assert_eq!(Solution::ALL.len(), 2);
        assert_eq!(ClimateModel::ALL.len(), 5);
    }
}

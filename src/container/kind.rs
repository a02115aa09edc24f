use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of object kinds a container can hold.
///
/// Kinds form a single-inheritance tree rooted at `NwbContainer`; a check that targets a
/// kind also applies to every kind below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "NWBContainer")]
    NwbContainer,
    #[serde(rename = "NWBFile")]
    NwbFile,
    Subject,
    Device,
    ProcessingModule,
    TimeSeries,
    ElectricalSeries,
    SpatialSeries,
    ImageSeries,
    RoiResponseSeries,
    DynamicTable,
    Units,
    TimeIntervals,
}

impl ObjectKind {
    pub const ALL: [Self; 13] = [
        Self::NwbContainer,
        Self::NwbFile,
        Self::Subject,
        Self::Device,
        Self::ProcessingModule,
        Self::TimeSeries,
        Self::ElectricalSeries,
        Self::SpatialSeries,
        Self::ImageSeries,
        Self::RoiResponseSeries,
        Self::DynamicTable,
        Self::Units,
        Self::TimeIntervals,
    ];

    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::NwbContainer => None,
            Self::NwbFile
            | Self::Subject
            | Self::Device
            | Self::ProcessingModule
            | Self::TimeSeries
            | Self::DynamicTable => Some(Self::NwbContainer),
            Self::ElectricalSeries
            | Self::SpatialSeries
            | Self::ImageSeries
            | Self::RoiResponseSeries => Some(Self::TimeSeries),
            Self::Units | Self::TimeIntervals => Some(Self::DynamicTable),
        }
    }

    /// True when `self` is `target` or one of its descendants.
    #[must_use]
    pub fn is_a(self, target: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == target {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NwbContainer => "NWBContainer",
            Self::NwbFile => "NWBFile",
            Self::Subject => "Subject",
            Self::Device => "Device",
            Self::ProcessingModule => "ProcessingModule",
            Self::TimeSeries => "TimeSeries",
            Self::ElectricalSeries => "ElectricalSeries",
            Self::SpatialSeries => "SpatialSeries",
            Self::ImageSeries => "ImageSeries",
            Self::RoiResponseSeries => "RoiResponseSeries",
            Self::DynamicTable => "DynamicTable",
            Self::Units => "Units",
            Self::TimeIntervals => "TimeIntervals",
        }
    }

    /// Attributes every object of this kind must carry to pass structural validation.
    #[must_use]
    pub fn required_attributes(self) -> &'static [&'static str] {
        match self {
            Self::NwbFile => &["identifier", "session_description", "session_start_time"],
            Self::DynamicTable | Self::Units | Self::TimeIntervals => &["colnames"],
            kind if kind.is_a(Self::TimeSeries) => &["data"],
            _ => &[],
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

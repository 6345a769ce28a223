// src/command/inspection_form/types.rs

use crate::checklist::catalog::InspectionModule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The seven wizard sections, by cursor index.
pub const SECTION_DETAILS: usize = 0;
pub const SECTION_PHOTOS: usize = 1;
pub const SECTION_CHECKLIST_FIRST: usize = 2;
pub const SECTION_CHECKLIST_LAST: usize = 4;
pub const SECTION_REVIEW: usize = 5;
pub const SECTION_CONFIRM: usize = 6;
pub const SECTION_COUNT: usize = 7;

pub fn section_title(section: usize) -> &'static str {
    match section {
        SECTION_DETAILS => "Details",
        SECTION_PHOTOS => "Photos",
        2 => "Checklist 1 of 3",
        3 => "Checklist 2 of 3",
        4 => "Checklist 3 of 3",
        SECTION_REVIEW => "Review & Sign",
        SECTION_CONFIRM => "Confirm & Submit",
        _ => "(out of range)",
    }
}

/// Per-item inspection verdict. Absence of a key in the record's status map
/// means the item has not been answered yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Good,
    Bad,
    Attention,
    Nil,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Good,
        ItemStatus::Bad,
        ItemStatus::Attention,
        ItemStatus::Nil,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Good => "Good",
            ItemStatus::Bad => "Bad",
            ItemStatus::Attention => "Attention",
            ItemStatus::Nil => "N/A",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoSide {
    Front,
    Left,
    Right,
    Rear,
}

impl PhotoSide {
    pub const ALL: [PhotoSide; 4] = [
        PhotoSide::Front,
        PhotoSide::Left,
        PhotoSide::Right,
        PhotoSide::Rear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhotoSide::Front => "Front",
            PhotoSide::Left => "Left side",
            PhotoSide::Right => "Right side",
            PhotoSide::Rear => "Rear",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureRole {
    Inspector,
    Driver,
}

impl SignatureRole {
    pub fn key(self) -> &'static str {
        match self {
            SignatureRole::Inspector => "inspector_signature",
            SignatureRole::Driver => "driver_signature",
        }
    }
}

/// Closed set of free-text identity fields on the record. The inspector name
/// is roster-sourced and pre-filled, so it is not part of this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    TruckNo,
    TrailerNo,
    JobCard,
    DriverName,
    Location,
    Odometer,
}

impl TextField {
    /// Stable identifier used as the validation-error key for this field.
    pub fn key(self) -> &'static str {
        match self {
            TextField::TruckNo => "truck_no",
            TextField::TrailerNo => "trailer_no",
            TextField::JobCard => "job_card",
            TextField::DriverName => "driver_name",
            TextField::Location => "location",
            TextField::Odometer => "odometer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::TruckNo => "Truck no.",
            TextField::TrailerNo => "Trailer no.",
            TextField::JobCard => "Job card ref.",
            TextField::DriverName => "Driver name",
            TextField::Location => "Location",
            TextField::Odometer => "Odometer (km)",
        }
    }
}

/// Error keys for the review section fields.
pub const KEY_REMARKS: &str = "remarks";
pub const KEY_RATE: &str = "rate";

/// Four opaque photo references, keyed by vehicle side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoSet {
    pub front: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub rear: Option<String>,
}

impl PhotoSet {
    pub fn get(&self, side: PhotoSide) -> Option<&str> {
        match side {
            PhotoSide::Front => self.front.as_deref(),
            PhotoSide::Left => self.left.as_deref(),
            PhotoSide::Right => self.right.as_deref(),
            PhotoSide::Rear => self.rear.as_deref(),
        }
    }

    pub fn set(&mut self, side: PhotoSide, reference: Option<String>) {
        let slot = match side {
            PhotoSide::Front => &mut self.front,
            PhotoSide::Left => &mut self.left,
            PhotoSide::Right => &mut self.right,
            PhotoSide::Rear => &mut self.rear,
        };
        *slot = reference;
    }
}

/// The artifact under construction. Photo and signature references are opaque
/// strings produced by the capture widgets; the record stores and transports
/// them without interpreting their contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub truck_no: String,
    pub trailer_no: String,
    pub job_card: String,
    pub inspector: String,
    pub driver_name: String,
    pub location: String,
    pub odometer: String,

    pub photos: PhotoSet,

    /// item id -> status. Keys are always drawn from the active module's
    /// catalogue; `ops::set_item_status` enforces that.
    pub item_status: BTreeMap<String, ItemStatus>,

    pub remarks: String,

    /// 1..=5; 0 is the unset sentinel.
    pub rate: u8,

    pub inspector_signature: Option<String>,
    pub driver_signature: Option<String>,
}

impl InspectionRecord {
    pub fn text_field(&self, field: TextField) -> &str {
        match field {
            TextField::TruckNo => &self.truck_no,
            TextField::TrailerNo => &self.trailer_no,
            TextField::JobCard => &self.job_card,
            TextField::DriverName => &self.driver_name,
            TextField::Location => &self.location,
            TextField::Odometer => &self.odometer,
        }
    }

    pub fn signature(&self, role: SignatureRole) -> Option<&str> {
        match role {
            SignatureRole::Inspector => self.inspector_signature.as_deref(),
            SignatureRole::Driver => self.driver_signature.as_deref(),
        }
    }
}

/// Offending field/item keys from the last failed advance or submit attempt.
/// Derived, recomputed wholesale, never persisted with the record.
pub type ValidationErrors = BTreeSet<String>;

/// Outcome of a submission handoff, owned by the hosting shell. The form
/// session only reads it to disable the submit control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    OfflineSaved,
}

/// One wizard run: the record being built plus the navigation cursor and the
/// transient error set. Bound to a single module for its lifetime.
#[derive(Clone, Debug)]
pub struct FormSession {
    pub module: InspectionModule,
    pub record: InspectionRecord,
    pub cursor: usize,
    pub errors: ValidationErrors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetreatOutcome {
    MovedBack,
    /// Retreating from the first section; the shell decides what exit means.
    ExitRequested,
}

/// Collaborators supplied by the hosting shell. Both are fire-and-forget from
/// the state machine's perspective; the session never awaits a result.
pub trait FormHost {
    fn persist_draft(&mut self, record: &InspectionRecord);
    fn submit(&mut self, record: &InspectionRecord);
}

#[derive(Debug)]
pub enum FormError {
    UnknownItem {
        module: InspectionModule,
        id: String,
    },
    InvalidRate(u8),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UnknownItem { module, id } => {
                write!(f, "item '{id}' is not in the {module:?} catalogue")
            }
            FormError::InvalidRate(r) => write!(f, "rating {r} outside 1..=5"),
        }
    }
}

impl std::error::Error for FormError {}

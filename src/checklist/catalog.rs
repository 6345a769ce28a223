// src/checklist/catalog.rs

use serde::{Deserialize, Serialize};

/// One of the four fixed inspection profiles. A form session is bound to a
/// single module for its whole lifetime; catalogues are never mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionModule {
    General,
    Petroleum,
    PetroleumV2,
    Acid,
}

impl InspectionModule {
    pub const ALL: [InspectionModule; 4] = [
        InspectionModule::General,
        InspectionModule::Petroleum,
        InspectionModule::PetroleumV2,
        InspectionModule::Acid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InspectionModule::General => "General Cargo",
            InspectionModule::Petroleum => "Petroleum Tanker",
            InspectionModule::PetroleumV2 => "Petroleum Tanker (rev. 2)",
            InspectionModule::Acid => "Acid Tanker",
        }
    }

    /// Job-card reference is mandatory for every module except general cargo.
    pub fn requires_job_card(self) -> bool {
        !matches!(self, InspectionModule::General)
    }
}

/// A single inspectable concern. Belongs to exactly one category in exactly
/// one module's catalogue.
#[derive(Debug)]
pub struct ItemConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
}

macro_rules! item {
    ($id:literal, $label:literal, $cat:literal) => {
        ItemConfig {
            id: $id,
            label: $label,
            category: $cat,
        }
    };
}

static GENERAL_ITEMS: &[ItemConfig] = &[
    item!("eng_oil_level", "Engine oil level", "Engine Compartment"),
    item!("eng_coolant_level", "Coolant level", "Engine Compartment"),
    item!("eng_belts", "Drive belts", "Engine Compartment"),
    item!("eng_leaks", "Fluid leaks", "Engine Compartment"),
    item!("eng_battery", "Battery and terminals", "Engine Compartment"),
    item!("ext_windscreen", "Windscreen and wipers", "Exterior & Body"),
    item!("ext_mirrors", "Mirrors", "Exterior & Body"),
    item!("ext_tyres_steer", "Steer axle tyres", "Exterior & Body"),
    item!("ext_tyres_drive", "Drive axle tyres", "Exterior & Body"),
    item!("ext_mudflaps", "Mudflaps", "Exterior & Body"),
    item!("cab_horn", "Horn", "Cab & Electrical"),
    item!("cab_gauges", "Dash gauges and warning lamps", "Cab & Electrical"),
    item!("cab_seatbelts", "Seat belts", "Cab & Electrical"),
    item!("cab_lights_head", "Headlights", "Cab & Electrical"),
    item!("cab_lights_indicators", "Indicators and hazards", "Cab & Electrical"),
    item!("cab_lights_brake", "Brake and tail lights", "Cab & Electrical"),
    item!("cab_reflectors", "Reflectors and markings", "Cab & Electrical"),
    item!("trl_kingpin", "Kingpin and fifth wheel", "Trailer & Coupling"),
    item!("trl_landing_legs", "Landing legs", "Trailer & Coupling"),
    item!("trl_tyres", "Trailer tyres", "Trailer & Coupling"),
    item!("trl_brake_lines", "Air and brake lines", "Trailer & Coupling"),
    item!("trl_lights", "Trailer lights", "Trailer & Coupling"),
    item!("saf_extinguisher", "Fire extinguisher", "Safety Equipment"),
    item!("saf_triangles", "Warning triangles", "Safety Equipment"),
    item!("saf_first_aid", "First aid kit", "Safety Equipment"),
    item!("saf_wheel_chocks", "Wheel chocks", "Safety Equipment"),
];

static PETROLEUM_ITEMS: &[ItemConfig] = &[
    item!("eng_oil_level", "Engine oil level", "Engine Compartment"),
    item!("eng_coolant_level", "Coolant level", "Engine Compartment"),
    item!("eng_belts", "Drive belts", "Engine Compartment"),
    item!("eng_leaks", "Fluid leaks", "Engine Compartment"),
    item!("ext_windscreen", "Windscreen and wipers", "Exterior & Body"),
    item!("ext_mirrors", "Mirrors", "Exterior & Body"),
    item!("ext_tyres_steer", "Steer axle tyres", "Exterior & Body"),
    item!("ext_tyres_drive", "Drive axle tyres", "Exterior & Body"),
    item!("cab_horn", "Horn", "Cab & Electrical"),
    item!("cab_gauges", "Dash gauges and warning lamps", "Cab & Electrical"),
    item!("cab_lights_head", "Headlights", "Cab & Electrical"),
    item!("cab_lights_brake", "Brake and tail lights", "Cab & Electrical"),
    item!("tnk_shell", "Tank shell and manlids", "Tanker Shell & Valves"),
    item!("tnk_foot_valves", "Foot valves", "Tanker Shell & Valves"),
    item!("tnk_discharge_valves", "Discharge valves and caps", "Tanker Shell & Valves"),
    item!("tnk_vents", "Pressure and vacuum vents", "Tanker Shell & Valves"),
    item!("tnk_hoses", "Delivery hoses", "Tanker Shell & Valves"),
    item!("bnd_earth_strap", "Earthing strap and reel", "Bonding & Earthing"),
    item!("bnd_bonding_cable", "Bonding cable continuity", "Bonding & Earthing"),
    item!("bnd_antistatic", "Anti-static straps", "Bonding & Earthing"),
    item!("emg_extinguishers", "Fire extinguishers (2 x 9 kg)", "Emergency Equipment"),
    item!("emg_spill_kit", "Spill kit", "Emergency Equipment"),
    item!("emg_hazchem_placards", "Hazchem placards", "Emergency Equipment"),
    item!("emg_info_panel", "Emergency information panel", "Emergency Equipment"),
];

static PETROLEUM_V2_ITEMS: &[ItemConfig] = &[
    item!("eng_oil_level", "Engine oil level", "Engine & Chassis"),
    item!("eng_coolant_level", "Coolant level", "Engine & Chassis"),
    item!("eng_air_system", "Air system build-up", "Engine & Chassis"),
    item!("chassis_frame", "Chassis and crossmembers", "Engine & Chassis"),
    item!("whl_steer", "Steer tyres and rims", "Wheels & Tyres"),
    item!("whl_drive", "Drive tyres and rims", "Wheels & Tyres"),
    item!("whl_trailer", "Trailer tyres and rims", "Wheels & Tyres"),
    item!("whl_nuts", "Wheel nuts and indicators", "Wheels & Tyres"),
    item!("cab_horn", "Horn", "Cab & Electrical"),
    item!("cab_gauges", "Dash gauges and warning lamps", "Cab & Electrical"),
    item!("cab_lights_all", "All lights and indicators", "Cab & Electrical"),
    item!("prd_meter", "Flow meter and seals", "Product Handling"),
    item!("prd_hoses", "Delivery hoses and couplings", "Product Handling"),
    item!("prd_dip_points", "Dip points and seals", "Product Handling"),
    item!("tnk_shell", "Tank shell and manlids", "Tanker Integrity"),
    item!("tnk_compartment_seals", "Compartment seals", "Tanker Integrity"),
    item!("tnk_vents", "Pressure and vacuum vents", "Tanker Integrity"),
    item!("emg_extinguishers", "Fire extinguishers (2 x 9 kg)", "Emergency Equipment"),
    item!("emg_spill_kit", "Spill kit", "Emergency Equipment"),
    item!("emg_ppe", "Driver PPE", "Emergency Equipment"),
];

static ACID_ITEMS: &[ItemConfig] = &[
    item!("eng_oil_level", "Engine oil level", "Engine Compartment"),
    item!("eng_coolant_level", "Coolant level", "Engine Compartment"),
    item!("eng_leaks", "Fluid leaks", "Engine Compartment"),
    item!("ext_windscreen", "Windscreen and wipers", "Exterior & Body"),
    item!("ext_mirrors", "Mirrors", "Exterior & Body"),
    item!("ext_tyres_steer", "Steer axle tyres", "Exterior & Body"),
    item!("ext_tyres_drive", "Drive axle tyres", "Exterior & Body"),
    item!("cab_horn", "Horn", "Cab & Electrical"),
    item!("cab_gauges", "Dash gauges and warning lamps", "Cab & Electrical"),
    item!("cab_lights_head", "Headlights", "Cab & Electrical"),
    item!("cab_lights_brake", "Brake and tail lights", "Cab & Electrical"),
    item!("acd_lining", "Tank lining condition", "Acid Tank & Lining"),
    item!("acd_dome_seals", "Dome lid seals", "Acid Tank & Lining"),
    item!("acd_discharge", "Discharge valves and couplings", "Acid Tank & Lining"),
    item!("acd_wash_water", "Emergency wash water supply", "Acid Tank & Lining"),
    item!("ppe_suit", "Acid suit", "PPE & Spill Response"),
    item!("ppe_goggles", "Goggles and face shield", "PPE & Spill Response"),
    item!("ppe_gloves", "Gauntlets", "PPE & Spill Response"),
    item!("spill_neutralizer", "Neutralizing agent", "PPE & Spill Response"),
    item!("saf_extinguisher", "Fire extinguisher", "Safety Equipment"),
    item!("saf_triangles", "Warning triangles", "Safety Equipment"),
    item!("saf_first_aid", "First aid kit", "Safety Equipment"),
];

/// Full ordered item catalogue for a module.
pub fn catalogue(module: InspectionModule) -> &'static [ItemConfig] {
    match module {
        InspectionModule::General => GENERAL_ITEMS,
        InspectionModule::Petroleum => PETROLEUM_ITEMS,
        InspectionModule::PetroleumV2 => PETROLEUM_V2_ITEMS,
        InspectionModule::Acid => ACID_ITEMS,
    }
}

/// Category partition: which categories belong to which checklist section.
/// Total and non-overlapping per module; sections outside 2..=4 have none.
pub fn categories_for_section(module: InspectionModule, section: usize) -> &'static [&'static str] {
    use InspectionModule::*;

    match (module, section) {
        (General, 2) => &["Engine Compartment", "Exterior & Body"],
        (General, 3) => &["Cab & Electrical"],
        (General, 4) => &["Trailer & Coupling", "Safety Equipment"],

        (Petroleum, 2) => &["Engine Compartment", "Exterior & Body"],
        (Petroleum, 3) => &["Cab & Electrical", "Tanker Shell & Valves"],
        (Petroleum, 4) => &["Bonding & Earthing", "Emergency Equipment"],

        (PetroleumV2, 2) => &["Engine & Chassis", "Wheels & Tyres"],
        (PetroleumV2, 3) => &["Cab & Electrical", "Product Handling"],
        (PetroleumV2, 4) => &["Tanker Integrity", "Emergency Equipment"],

        (Acid, 2) => &["Engine Compartment", "Exterior & Body"],
        (Acid, 3) => &["Cab & Electrical", "Acid Tank & Lining"],
        (Acid, 4) => &["PPE & Spill Response", "Safety Equipment"],

        _ => &[],
    }
}

pub fn is_known_item(module: InspectionModule, id: &str) -> bool {
    catalogue(module).iter().any(|i| i.id == id)
}

// ======================================================
// Unit Tests
// ======================================================

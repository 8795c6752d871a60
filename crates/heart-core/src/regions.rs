//! Static table of anatomical regions shown on the heart model.
//!
//! Anchors live in the model group's local space, the same space the picker
//! reports hits in, so a coordinate read off the pick badge can be pasted
//! straight into this table.

use glam::Vec3;
use std::fmt;

/// Identifier of a seeded region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    LeftVentricle,
    RightVentricle,
    LeftAtrium,
    RightAtrium,
    Aorta,
    PulmonaryArtery,
    SuperiorVenaCava,
}

impl RegionId {
    pub const ALL: [RegionId; 7] = [
        RegionId::LeftVentricle,
        RegionId::RightVentricle,
        RegionId::LeftAtrium,
        RegionId::RightAtrium,
        RegionId::Aorta,
        RegionId::PulmonaryArtery,
        RegionId::SuperiorVenaCava,
    ];

    /// Stable key used for DOM ids and data attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::LeftVentricle => "left_ventricle",
            RegionId::RightVentricle => "right_ventricle",
            RegionId::LeftAtrium => "left_atrium",
            RegionId::RightAtrium => "right_atrium",
            RegionId::Aorta => "aorta",
            RegionId::PulmonaryArtery => "pulmonary_artery",
            RegionId::SuperiorVenaCava => "superior_vena_cava",
        }
    }

    pub fn from_key(key: &str) -> Option<RegionId> {
        RegionId::ALL.into_iter().find(|id| id.as_str() == key)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive the region was modelled with before the scanned mesh replaced
/// the procedural heart. Front-ends use it to style the label marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryHint {
    Sphere,
    Cylinder,
    Ellipsoid,
}

impl GeometryHint {
    pub fn css_class(self) -> &'static str {
        match self {
            GeometryHint::Sphere => "marker-sphere",
            GeometryHint::Cylinder => "marker-cylinder",
            GeometryHint::Ellipsoid => "marker-ellipsoid",
        }
    }
}

/// sRGB color stored as bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Hex color with an alpha byte appended, as used for tinted backgrounds.
    pub fn to_hex_alpha(self, alpha: u8) -> String {
        format!("{}{:02x}", self.to_hex(), alpha)
    }

    pub fn to_f32(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

const MUSCLE_COLOR: Rgb = Rgb(0x47, 0x55, 0x69);
const AORTA_COLOR: Rgb = Rgb(0x64, 0x74, 0x8b);
const VEIN_COLOR: Rgb = Rgb(0x94, 0xa3, 0xb8);

#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub name: &'static str,
    pub color: Rgb,
    pub anchor: Vec3,
    pub scale: Vec3,
    pub rotation: Option<Vec3>,
    pub geometry: GeometryHint,
    pub description: &'static str,
    pub functions: &'static [&'static str],
    pub facts: &'static [&'static str],
    pub disorders: &'static [&'static str],
    pub is_inner: bool,
}

impl Region {
    /// First fact, shown in the detail panel.
    pub fn headline_fact(&self) -> Option<&'static str> {
        self.facts.first().copied()
    }
}

pub static HEART_REGIONS: [Region; 7] = [
    Region {
        id: RegionId::LeftVentricle,
        name: "Left Ventricle",
        color: MUSCLE_COLOR,
        anchor: Vec3::new(1.361, -0.539, 0.088),
        scale: Vec3::new(0.9, 1.2, 0.9),
        rotation: Some(Vec3::new(0.2, 0.0, 0.3)),
        geometry: GeometryHint::Ellipsoid,
        description: "The thickest of the heart's chambers and is responsible for pumping oxygenated blood to tissues all over the body.",
        functions: &[
            "Pumps oxygenated blood to the body",
            "Maintains systemic blood pressure",
        ],
        facts: &[
            "It has the thickest walls of all chambers.",
            "It pumps at high pressure to reach the entire body.",
        ],
        disorders: &["Left ventricular hypertrophy", "Heart failure"],
        is_inner: false,
    },
    Region {
        id: RegionId::RightVentricle,
        name: "Right Ventricle",
        color: MUSCLE_COLOR,
        anchor: Vec3::new(-0.245, -0.587, 1.065),
        scale: Vec3::new(0.8, 1.0, 0.8),
        rotation: Some(Vec3::new(0.1, 0.0, -0.2)),
        geometry: GeometryHint::Ellipsoid,
        description: "The chamber that pumps deoxygenated blood to the lungs.",
        functions: &["Pumps deoxygenated blood to the lungs via the pulmonary artery"],
        facts: &[
            "Its walls are thinner than the left ventricle.",
            "It pumps blood at a lower pressure.",
        ],
        disorders: &[
            "Right ventricular failure",
            "Arrhythmogenic right ventricular dysplasia",
        ],
        is_inner: false,
    },
    Region {
        id: RegionId::LeftAtrium,
        name: "Left Atrium",
        color: MUSCLE_COLOR,
        anchor: Vec3::new(0.405, 0.350, -0.252),
        scale: Vec3::new(0.6, 0.5, 0.6),
        rotation: None,
        geometry: GeometryHint::Sphere,
        description: "Receives oxygenated blood from the lungs and pumps it into the left ventricle.",
        functions: &[
            "Receives oxygenated blood from pulmonary veins",
            "Pumps blood to left ventricle",
        ],
        facts: &[
            "It is located on the posterior aspect of the heart.",
            "The walls are relatively thin.",
        ],
        disorders: &["Atrial fibrillation", "Mitral valve stenosis"],
        is_inner: false,
    },
    Region {
        id: RegionId::RightAtrium,
        name: "Right Atrium",
        color: MUSCLE_COLOR,
        anchor: Vec3::new(-0.154, 1.788, -0.376),
        scale: Vec3::new(0.6, 0.5, 0.6),
        rotation: None,
        geometry: GeometryHint::Sphere,
        description: "Receives deoxygenated blood from the body through the vena cava and pumps it into the right ventricle.",
        functions: &[
            "Receives deoxygenated blood from the body",
            "Pumps blood to right ventricle",
            "Contains the SA node (pacemaker)",
        ],
        facts: &[
            "Contains the sinoatrial (SA) node, the natural pacemaker.",
            "Receives blood from three veins.",
        ],
        disorders: &["Atrial flutter", "Tricuspid regurgitation"],
        is_inner: false,
    },
    Region {
        id: RegionId::Aorta,
        name: "Aorta",
        color: AORTA_COLOR,
        anchor: Vec3::new(-0.213, 1.080, 0.001),
        scale: Vec3::new(0.4, 0.8, 0.4),
        rotation: Some(Vec3::new(0.0, 0.0, 0.2)),
        geometry: GeometryHint::Cylinder,
        description: "The largest artery in the body. It carries oxygen-rich blood from the left ventricle to the rest of the body.",
        functions: &["Distributes oxygenated blood to all parts of the body"],
        facts: &[
            "It is roughly the diameter of a garden hose.",
            "The wall is very elastic to handle high pressure.",
        ],
        disorders: &["Aortic aneurysm", "Aortic dissection"],
        is_inner: false,
    },
    Region {
        id: RegionId::PulmonaryArtery,
        name: "Pulmonary Artery",
        color: VEIN_COLOR,
        anchor: Vec3::new(-0.893, 1.215, -0.176),
        scale: Vec3::new(0.35, 0.7, 0.35),
        rotation: Some(Vec3::new(0.3, 0.0, -0.4)),
        geometry: GeometryHint::Cylinder,
        description: "Carries deoxygenated blood from the right ventricle to the lungs.",
        functions: &["Transports oxygen-depleted blood to the lungs for oxygenation"],
        facts: &[
            "It is the only artery that carries deoxygenated blood.",
            "It branches into the left and right pulmonary arteries.",
        ],
        disorders: &["Pulmonary hypertension", "Pulmonary embolism"],
        is_inner: false,
    },
    Region {
        id: RegionId::SuperiorVenaCava,
        name: "Superior Vena Cava",
        color: VEIN_COLOR,
        anchor: Vec3::new(-1.131, 0.615, -0.377),
        scale: Vec3::new(0.3, 0.6, 0.3),
        rotation: Some(Vec3::new(0.0, 0.0, 0.0)),
        geometry: GeometryHint::Cylinder,
        description: "A large vein carrying deoxygenated blood from the upper body to the right atrium.",
        functions: &["Returns deoxygenated blood from the upper half of the body to the heart"],
        facts: &[
            "It is one of the two major veins returning blood to the heart.",
            "It lacks valves.",
        ],
        disorders: &["Superior vena cava syndrome"],
        is_inner: false,
    },
];

pub const DID_YOU_KNOW_FACTS: [&str; 7] = [
    "The human heart beats approximately 100,000 times a day.",
    "Your heart pumps about 2,000 gallons of blood every day.",
    "An adult heart is roughly the size of two hands clasped together.",
    "The heart can continue beating out of the body if it has enough oxygen.",
    "The right side of your heart pumps blood into your lungs.",
    "The left side of your heart pumps blood to the rest of your body.",
    "Your system of blood vessels is over 60,000 miles long.",
];

#[inline]
pub fn regions() -> &'static [Region] {
    &HEART_REGIONS
}

pub fn region(id: RegionId) -> Option<&'static Region> {
    HEART_REGIONS.iter().find(|r| r.id == id)
}

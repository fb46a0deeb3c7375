//! Read-only informational records shown next to the viewers and read
//! aloud by the narration hook.

use serde::Serialize;

use crate::geometry::SolidKind;

/// One labelled fact ("Diámetro" → "12.742 km").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

const fn fact(label: &'static str, value: &'static str) -> Fact {
    Fact { label, value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyFacts {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub facts: &'static [Fact],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolidFacts {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub faces: u32,
    pub edges: u32,
    pub vertices: u32,
}

impl SolidFacts {
    /// Euler characteristic; 2 for every convex solid.
    pub fn euler(&self) -> i64 {
        i64::from(self.vertices) - i64::from(self.edges) + i64::from(self.faces)
    }
}

const BODIES: &[BodyFacts] = &[
    BodyFacts {
        id: "sol",
        name: "Sol",
        description: "La estrella en el centro del sistema solar. Contiene más del 99 % de toda su masa.",
        facts: &[
            fact("Diámetro", "1.391.000 km"),
            fact("Temperatura superficial", "5.500 °C"),
            fact("Edad", "4.600 millones de años"),
        ],
    },
    BodyFacts {
        id: "mercurio",
        name: "Mercurio",
        description: "El planeta más pequeño y el más cercano al Sol.",
        facts: &[
            fact("Diámetro", "4.879 km"),
            fact("Año", "88 días"),
            fact("Lunas", "0"),
        ],
    },
    BodyFacts {
        id: "venus",
        name: "Venus",
        description: "El planeta más caliente, cubierto por densas nubes de ácido sulfúrico. Gira en sentido contrario.",
        facts: &[
            fact("Diámetro", "12.104 km"),
            fact("Año", "225 días"),
            fact("Lunas", "0"),
        ],
    },
    BodyFacts {
        id: "tierra",
        name: "Tierra",
        description: "Nuestro hogar, el único planeta conocido con vida y agua líquida en su superficie.",
        facts: &[
            fact("Diámetro", "12.742 km"),
            fact("Año", "365 días"),
            fact("Lunas", "1"),
        ],
    },
    BodyFacts {
        id: "marte",
        name: "Marte",
        description: "El planeta rojo, con el volcán más alto del sistema solar: el monte Olimpo.",
        facts: &[
            fact("Diámetro", "6.779 km"),
            fact("Año", "687 días"),
            fact("Lunas", "2"),
        ],
    },
    BodyFacts {
        id: "jupiter",
        name: "Júpiter",
        description: "El gigante gaseoso más grande, con una tormenta más grande que la Tierra: la Gran Mancha Roja.",
        facts: &[
            fact("Diámetro", "139.820 km"),
            fact("Año", "12 años"),
            fact("Lunas", "95"),
        ],
    },
    BodyFacts {
        id: "saturno",
        name: "Saturno",
        description: "Famoso por sus anillos de hielo y roca. Es tan poco denso que flotaría en el agua.",
        facts: &[
            fact("Diámetro", "116.460 km"),
            fact("Año", "29 años"),
            fact("Lunas", "146"),
        ],
    },
    BodyFacts {
        id: "urano",
        name: "Urano",
        description: "Un gigante de hielo que gira tumbado de lado.",
        facts: &[
            fact("Diámetro", "50.724 km"),
            fact("Año", "84 años"),
            fact("Lunas", "28"),
        ],
    },
    BodyFacts {
        id: "neptuno",
        name: "Neptuno",
        description: "El planeta más lejano, con los vientos más rápidos del sistema solar.",
        facts: &[
            fact("Diámetro", "49.244 km"),
            fact("Año", "165 años"),
            fact("Lunas", "16"),
        ],
    },
];

const SOLIDS: &[SolidFacts] = &[
    SolidFacts {
        id: "cubo",
        name: "Cubo",
        description: "Seis caras cuadradas iguales. Tres caras se encuentran en cada vértice.",
        faces: 6,
        edges: 12,
        vertices: 8,
    },
    SolidFacts {
        id: "tetraedro",
        name: "Tetraedro",
        description: "El poliedro regular más simple: cuatro triángulos equiláteros.",
        faces: 4,
        edges: 6,
        vertices: 4,
    },
    SolidFacts {
        id: "octaedro",
        name: "Octaedro",
        description: "Ocho triángulos equiláteros, como dos pirámides unidas por la base.",
        faces: 8,
        edges: 12,
        vertices: 6,
    },
    SolidFacts {
        id: "dodecaedro",
        name: "Dodecaedro",
        description: "Doce pentágonos regulares. Tres caras se encuentran en cada vértice.",
        faces: 12,
        edges: 30,
        vertices: 20,
    },
    SolidFacts {
        id: "icosaedro",
        name: "Icosaedro",
        description: "Veinte triángulos equiláteros. Cinco caras se encuentran en cada vértice.",
        faces: 20,
        edges: 30,
        vertices: 12,
    },
    SolidFacts {
        id: "prisma",
        name: "Prisma triangular",
        description: "Dos bases triangulares unidas por tres caras rectangulares.",
        faces: 5,
        edges: 9,
        vertices: 6,
    },
    SolidFacts {
        id: "piramide",
        name: "Pirámide cuadrada",
        description: "Una base cuadrada y cuatro caras triangulares que se unen en el vértice superior.",
        faces: 5,
        edges: 8,
        vertices: 5,
    },
];

/// Facts for a sun or planet id.
pub fn body_facts(id: &str) -> Option<&'static BodyFacts> {
    BODIES.iter().find(|body| body.id == id)
}

/// Facts for a solid; unknown ids resolve like the geometry does (cube).
pub fn solid_facts(id: &str) -> &'static SolidFacts {
    let kind = SolidKind::from_id(id);
    SOLIDS
        .iter()
        .find(|solid| solid.id == kind.id())
        .unwrap_or(&SOLIDS[0])
}

pub fn all_solids() -> &'static [SolidFacts] {
    SOLIDS
}

/// Sentence read aloud when a body is selected.
pub fn narration_for_body(id: &str) -> Option<String> {
    body_facts(id).map(|body| format!("{}. {}", body.name, body.description))
}

pub fn narration_for_solid(id: &str) -> String {
    let solid = solid_facts(id);
    format!(
        "{}. {} Tiene {} caras, {} aristas y {} vértices.",
        solid.name, solid.description, solid.faces, solid.edges, solid.vertices
    )
}

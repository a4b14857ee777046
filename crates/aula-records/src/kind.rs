use std::fmt;

/// The record collections served by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Students,
    Teachers,
    Subjects,
    Grades,
    Reports,
}

struct Registration {
    collection: &'static str,
    route: &'static str,
    payload_key: &'static str,
    created: &'static str,
    updated: &'static str,
    deactivated: &'static str,
    not_found: &'static str,
}

pub(crate) const KIND_COUNT: usize = 5;

// Indexed by `EntityKind as usize`.
static REGISTRY: [Registration; KIND_COUNT] = [
    Registration {
        collection: "Estudiantes",
        route: "estudiantes",
        payload_key: "estudiante",
        created: "Estudiante agregado",
        updated: "Estudiante actualizado",
        deactivated: "Estudiante desactivado",
        not_found: "Estudiante no encontrado",
    },
    Registration {
        collection: "Profesores",
        route: "profesores",
        payload_key: "profesor",
        created: "Profesor agregado",
        updated: "Profesor actualizado",
        deactivated: "Profesor desactivado",
        not_found: "Profesor no encontrado",
    },
    Registration {
        collection: "Materias",
        route: "materias",
        payload_key: "materia",
        created: "Materia agregada",
        updated: "Materia actualizada",
        deactivated: "Materia desactivada",
        not_found: "Materia no encontrada",
    },
    Registration {
        collection: "Calificaciones",
        route: "calificaciones",
        payload_key: "calificacion",
        created: "Calificación agregada",
        updated: "Calificación actualizada",
        deactivated: "Calificación desactivada",
        not_found: "Calificación no encontrada",
    },
    Registration {
        collection: "Reportes",
        route: "reportes",
        payload_key: "reporte",
        created: "Reporte agregado",
        updated: "Reporte actualizado",
        deactivated: "Reporte desactivado",
        not_found: "Reporte no encontrado",
    },
];

impl EntityKind {
    pub const ALL: [EntityKind; KIND_COUNT] = [
        EntityKind::Students,
        EntityKind::Teachers,
        EntityKind::Subjects,
        EntityKind::Grades,
        EntityKind::Reports,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn registration(self) -> &'static Registration {
        &REGISTRY[self.index()]
    }

    /// Name of the backing collection document.
    pub fn collection(self) -> &'static str {
        self.registration().collection
    }

    /// URL path segment, without the leading slash.
    pub fn route(self) -> &'static str {
        self.registration().route
    }

    /// Key under which a single record is returned in confirmations.
    pub fn payload_key(self) -> &'static str {
        self.registration().payload_key
    }

    pub fn created_message(self) -> &'static str {
        self.registration().created
    }

    pub fn updated_message(self) -> &'static str {
        self.registration().updated
    }

    pub fn deactivated_message(self) -> &'static str {
        self.registration().deactivated
    }

    pub fn not_found_message(self) -> &'static str {
        self.registration().not_found
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

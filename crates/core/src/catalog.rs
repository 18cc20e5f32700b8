//! Builtin curriculum shipped with the site.
//!
//! Everything here is `static` data; the tree never changes at runtime.

use crate::model::{Course, CourseLevel, Lesson, Module, Track};

/// All builtin tracks, in display order.
#[must_use]
pub fn learning_tracks() -> &'static [Track] {
    &TRACKS
}

static TRACKS: [Track; 2] = [
    Track::new(
        "fundamentos-it",
        "Fundamentos IT",
        "Construye bases solidas en sistemas, redes y herramientas de trabajo tecnico.",
        &FUNDAMENTOS_IT_COURSES,
    ),
    Track::new(
        "desarrollo-web",
        "Desarrollo Web",
        "Ruta orientada a construir productos web modernos y desplegables.",
        &DESARROLLO_WEB_COURSES,
    ),
];

// ─── Fundamentos IT ────────────────────────────────────────────────────────────

static FUNDAMENTOS_IT_COURSES: [Course; 2] = [
    Course::new(
        "linux-practico",
        "Linux Practico",
        CourseLevel::Basic,
        "Aprende terminal, sistema de archivos y automatizacion inicial.",
        8,
        &LINUX_PRACTICO_MODULES,
    ),
    Course::new(
        "redes-desde-cero",
        "Redes Desde Cero",
        CourseLevel::Basic,
        "Comprende conectividad, diagnostico y principios de red para soporte tecnico.",
        7,
        &REDES_DESDE_CERO_MODULES,
    ),
];

static LINUX_PRACTICO_MODULES: [Module; 2] = [
    Module::new(
        "entorno-terminal",
        "Entorno y Terminal",
        "Navegacion, comandos base y buenas practicas.",
        &ENTORNO_TERMINAL_LESSONS,
    ),
    Module::new(
        "automatizacion-inicial",
        "Automatizacion Inicial",
        "Introduccion a scripts y tareas repetitivas.",
        &AUTOMATIZACION_INICIAL_LESSONS,
    ),
];

static ENTORNO_TERMINAL_LESSONS: [Lesson; 2] = [
    Lesson::new(
        "primeros-comandos",
        "Primeros comandos",
        "Comandos esenciales para moverte y entender el sistema.",
        18,
        &[
            "Entender pwd, ls, cd y man.",
            "Usar rutas absolutas y relativas sin confusion.",
            "Explorar ayuda integrada para aprender autonomamente.",
        ],
        &[
            "La terminal es tu interfaz principal para operar de forma rapida y repetible.",
            "Trabaja con rutas claras y confirma siempre tu ubicacion con pwd antes de ejecutar cambios.",
            "Usa man y --help para descubrir opciones en lugar de memorizar todo desde el inicio.",
        ],
    ),
    Lesson::new(
        "archivos-y-directorios",
        "Archivos y directorios",
        "Crear, mover y organizar recursos sin perder control.",
        22,
        &[
            "Crear y eliminar archivos de forma segura.",
            "Mover y copiar directorios manteniendo estructura.",
            "Aplicar convenciones de nombres para proyectos.",
        ],
        &[
            "mkdir, touch, cp y mv te permiten iterar rapido en tu entorno de trabajo.",
            "Antes de borrar, lista el contenido y valida dos veces para evitar perdida de informacion.",
            "Una estructura consistente ahorra tiempo cuando escalas proyectos o trabajas en equipo.",
        ],
    ),
];

static AUTOMATIZACION_INICIAL_LESSONS: [Lesson; 2] = [
    Lesson::new(
        "bash-basico",
        "Bash basico",
        "Variables, condiciones y bucles simples.",
        26,
        &[
            "Crear scripts ejecutables con shebang.",
            "Usar variables y argumentos de entrada.",
            "Controlar flujo con if y for.",
        ],
        &[
            "Un script pequeno elimina trabajo manual y reduce errores por repeticion.",
            "Empieza con casos concretos: renombrar archivos, limpiar logs o validar estructura.",
            "Versiona tus scripts para documentar evolucion y facilitar mantenimiento.",
        ],
    ),
    Lesson::new(
        "tarea-final-linux",
        "Mini proyecto Linux",
        "Automatiza una rutina diaria en un script reproducible.",
        30,
        &[
            "Definir un caso de uso real.",
            "Implementar script con validaciones minimas.",
            "Documentar ejecucion y resultados.",
        ],
        &[
            "Construye un script que prepare una carpeta de trabajo con estructura estandar.",
            "Incluye verificaciones para no sobreescribir archivos existentes por accidente.",
            "Termina dejando una guia breve de uso para otra persona del equipo.",
        ],
    ),
];

static REDES_DESDE_CERO_MODULES: [Module; 1] = [Module::new(
    "fundamentos-red",
    "Fundamentos de Red",
    "Conceptos clave para interpretar trafico y arquitectura basica.",
    &FUNDAMENTOS_RED_LESSONS,
)];

static FUNDAMENTOS_RED_LESSONS: [Lesson; 2] = [
    Lesson::new(
        "modelo-osi-simple",
        "Modelo OSI sin humo",
        "Entiende capas con ejemplos concretos y practicos.",
        20,
        &[
            "Relacionar capas con problemas reales.",
            "Separar funciones de transporte y aplicacion.",
            "Usar modelo como marco de diagnostico.",
        ],
        &[
            "El modelo OSI no es teoria vacia: te ayuda a localizar donde se rompe una comunicacion.",
            "Evita memorizar capas sin contexto; conecta cada una con herramientas y sintomas comunes.",
            "Practica analizando fallos simples: DNS caido, puerto bloqueado, cable desconectado.",
        ],
    ),
    Lesson::new(
        "ip-y-subredes",
        "IP y subredes",
        "Direccionamiento esencial para diagnosticar conectividad.",
        24,
        &[
            "Leer una direccion IP y su mascara.",
            "Diferenciar red, host y gateway.",
            "Detectar errores frecuentes de configuracion.",
        ],
        &[
            "Comprender subneteo basico reduce tiempos de soporte y evita cambios a ciegas.",
            "Mapea rangos y reserva direcciones con criterio para crecimiento futuro.",
            "Documenta siempre direccionamiento para tener trazabilidad operativa.",
        ],
    ),
];

// ─── Desarrollo Web ────────────────────────────────────────────────────────────

static DESARROLLO_WEB_COURSES: [Course; 1] = [Course::new(
    "frontend-moderno",
    "Frontend Moderno",
    CourseLevel::Intermediate,
    "HTML semantico, CSS utilitario y componentes reutilizables.",
    9,
    &FRONTEND_MODERNO_MODULES,
)];

static FRONTEND_MODERNO_MODULES: [Module; 1] = [Module::new(
    "fundamentos-ui",
    "Fundamentos de UI",
    "Bases para interfaces claras, accesibles y mantenibles.",
    &FUNDAMENTOS_UI_LESSONS,
)];

static FUNDAMENTOS_UI_LESSONS: [Lesson; 2] = [
    Lesson::new(
        "arquitectura-de-componentes",
        "Arquitectura de componentes",
        "Disena interfaces por bloques independientes.",
        25,
        &[
            "Separar presentacion, estado y comportamiento.",
            "Evitar acoplamiento entre secciones.",
            "Definir componentes reutilizables con API clara.",
        ],
        &[
            "Un buen sistema de componentes acelera iteraciones y reduce bugs visuales.",
            "Empieza pequeno: boton, tarjeta, formulario, y escala hacia patrones compuestos.",
            "Documenta variantes para mantener consistencia del producto.",
        ],
    ),
    Lesson::new(
        "accesibilidad-practica",
        "Accesibilidad practica",
        "Mejoras concretas para navegacion y lectura inclusiva.",
        21,
        &[
            "Aplicar jerarquia semantica en titulos y landmarks.",
            "Mejorar foco, contraste y navegacion por teclado.",
            "Detectar problemas comunes de accesibilidad.",
        ],
        &[
            "La accesibilidad mejora experiencia para todos, no solo para casos extremos.",
            "Priorizando foco visible y etiquetas correctas eliminas gran parte de friccion de uso.",
            "Integra estas validaciones en cada iteracion para no dejar deuda tecnica.",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ships_two_tracks_and_three_courses() {
        let tracks = learning_tracks();
        assert_eq!(tracks.len(), 2);
        let courses: usize = tracks.iter().map(|track| track.courses().len()).sum();
        assert_eq!(courses, 3);
    }

    #[test]
    fn slugs_are_unique_within_their_parent() {
        for track in learning_tracks() {
            let courses: HashSet<_> = track.courses().iter().map(Course::slug).collect();
            assert_eq!(courses.len(), track.courses().len());
            for course in track.courses() {
                let modules: HashSet<_> = course.modules().iter().map(Module::slug).collect();
                assert_eq!(modules.len(), course.modules().len());
                for module in course.modules() {
                    let lessons: HashSet<_> = module.lessons().iter().map(Lesson::slug).collect();
                    assert_eq!(lessons.len(), module.lessons().len());
                }
            }
        }
    }

    #[test]
    fn slugs_never_contain_separator() {
        for track in learning_tracks() {
            assert!(!track.slug().contains('/'));
            for course in track.courses() {
                assert!(!course.slug().contains('/'));
                for module in course.modules() {
                    assert!(!module.slug().contains('/'));
                    for lesson in module.lessons() {
                        assert!(!lesson.slug().contains('/'));
                        assert!(!lesson.slug().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn linux_course_totals() {
        let course = learning_tracks()[0].course("linux-practico").unwrap();
        assert_eq!(course.lesson_count(), 4);
        assert_eq!(course.total_minutes(), 18 + 22 + 26 + 30);
    }
}

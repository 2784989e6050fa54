//! Static selector configuration for profile extraction
//!
//! One entry per record attribute, ordered by priority: the span-based
//! markup of current shelter sub-sites first, the legacy definition-list
//! markup second. This table is configuration, not code; extraction walks
//! it through the resolver.

/// Container holding all profile fields on a detail page.
pub const PROFILE_CONTAINER: &str = "div.ficha_animal";

pub const ID: &[&str] = &[".ficha_id span", "dd.ficha_id"];
pub const NAME: &[&str] = &[".ficha_nombre span", "dd.ficha_nombre"];
pub const CLASS: &[&str] = &[".ficha_tipo span", "dd.ficha_tipo"];
pub const SINCE: &[&str] = &[".ficha_desde span", "dd.ficha_desde"];
pub const GENDER: &[&str] = &[".ficha_sexo span", "dd.ficha_sexo"];
pub const AGE: &[&str] = &[".ficha_edad span", "dd.ficha_edad"];
pub const BIRTHDAY: &[&str] = &[".ficha_nacimiento span", "dd.ficha_nacimiento"];
pub const RACE: &[&str] = &[".ficha_raza span", "dd.ficha_raza"];
pub const SIZE: &[&str] = &[".ficha_tamanio span", "dd.ficha_tamanio"];
pub const WEIGHT: &[&str] = &[".ficha_peso span", "dd.ficha_peso"];
pub const CHIP: &[&str] = &[".ficha_chip span", "dd.ficha_chip"];
pub const SITUATION: &[&str] = &[".ficha_situacion span", "dd.ficha_situacion"];
pub const LOCATION: &[&str] = &[".ficha_localidad span", "dd.ficha_localidad"];
pub const HEALTH: &[&str] = &[".ficha_salud", "dd.ficha_salud"];
pub const STATUS: &[&str] = &["strong.estado span"];
pub const DESCRIPTION: &[&str] = &[".ficha_descripcion > div"];

/// Marker elements: presence alone raises the flag, content is ignored.
pub const URGENT_MARKER: &str = "strong.urgente span";
pub const SPECIAL_CASE_MARKER: &str = "strong.caso_especial span";

/// Profile photo; its src attribute is resolved against the page URL.
pub const IMAGE: &str = "#contenedor_foto > img";

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_every_selector_parses() {
        let tables: &[&[&str]] = &[
            ID, NAME, CLASS, SINCE, GENDER, AGE, BIRTHDAY, RACE, SIZE, WEIGHT, CHIP, SITUATION,
            LOCATION, HEALTH, STATUS, DESCRIPTION,
        ];

        for table in tables {
            for css in *table {
                assert!(Selector::parse(css).is_ok(), "bad selector: {}", css);
            }
        }

        for css in [PROFILE_CONTAINER, URGENT_MARKER, SPECIAL_CASE_MARKER, IMAGE] {
            assert!(Selector::parse(css).is_ok(), "bad selector: {}", css);
        }
    }
}

// File: src/schemas/community.rs
// Purpose: Reports, posts and comments

use crate::field::Field;
use crate::schema::Schema;

pub fn report_schema() -> Schema {
    Schema::new("report").field(Field::text("description").non_empty("El reporte es requerido."))
}

pub fn post_schema() -> Schema {
    Schema::new("post")
        .field(Field::text("title").non_empty("El titulo es requerido."))
        .field(Field::text("description").non_empty("La descripcion es requerido."))
}

pub fn comment_schema() -> Schema {
    Schema::new("comment").field(Field::text("comment").non_empty("El comentario es requerido."))
}

use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: gridmesh::Editor,
}

impl Editor {
    pub fn rs_new(screen_w: f32, screen_h: f32) -> Editor {
        Editor {
            inner: gridmesh::Editor::new(screen_w, screen_h),
        }
    }
}

//! In-memory surfaces for registry and layout tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use multimind_common::{Rect, ServiceDescriptor, SurfaceError};

use crate::surface::{Surface, SurfaceFactory};

#[derive(Debug)]
pub struct FakeSurface {
    key: String,
    bounds: RefCell<Option<Rect>>,
    visible: Cell<bool>,
    reloads: Cell<u32>,
    fail_bounds: Cell<bool>,
}

impl FakeSurface {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            bounds: RefCell::new(None),
            visible: Cell::new(false),
            reloads: Cell::new(0),
            fail_bounds: Cell::new(false),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        *self.bounds.borrow()
    }

    pub fn clear_bounds(&self) {
        *self.bounds.borrow_mut() = None;
    }

    pub fn fail_bounds(&self) {
        self.fail_bounds.set(true);
    }

    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    pub fn reloads(&self) -> u32 {
        self.reloads.get()
    }
}

impl Surface for FakeSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        if self.fail_bounds.get() {
            return Err(SurfaceError::Operation("bounds rejected".into()));
        }
        *self.bounds.borrow_mut() = Some(bounds);
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.visible.set(visible);
        Ok(())
    }

    fn reload(&self) -> Result<(), SurfaceError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}

/// Records every creation; can be told to fail for one key or to act as if
/// the window is gone.
#[derive(Default)]
pub struct FakeFactory {
    pub created: Rc<RefCell<Vec<String>>>,
    pub fail_key: Option<String>,
    pub window_gone: bool,
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(
        &mut self,
        service: &ServiceDescriptor,
        bounds: Rect,
    ) -> Result<FakeSurface, SurfaceError> {
        if self.window_gone {
            return Err(SurfaceError::WindowGone);
        }
        if self.fail_key.as_deref() == Some(service.key.as_str()) {
            return Err(SurfaceError::Create {
                key: service.key.clone(),
                reason: "engine refused".into(),
            });
        }
        self.created.borrow_mut().push(service.key.clone());
        let surface = FakeSurface::new(&service.key);
        *surface.bounds.borrow_mut() = Some(bounds);
        Ok(surface)
    }
}

pub fn services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new("gemini", "https://gemini.google.com/app", "Gemini"),
        ServiceDescriptor::new("chatgpt", "https://chatgpt.com/", "ChatGPT"),
        ServiceDescriptor::new("claude", "https://claude.ai/", "Claude"),
    ]
}

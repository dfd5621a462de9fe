use crate::controllers::fractal::ports::graphics_device::{
    BuildError, GraphicsDevicePort, UniformError, UniformValue,
};
use crate::core::data::dimensions::Dimensions;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ProgramError {
    NoActiveProgram,
    Uniform(UniformError),
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveProgram => {
                write!(f, "no compiled program is active")
            }
            Self::Uniform(error) => error.fmt(f),
        }
    }
}

impl Error for ProgramError {}

/// Owns the graphics device and at most one compiled program.
///
/// `rebuild` compiles the replacement before touching the active
/// program: a failed build returns the error and leaves the previous
/// program usable, and a successful build releases the previous program
/// at the swap. The manager never holds two programs past that point.
pub struct ProgramManager<G: GraphicsDevicePort> {
    device: G,
    active: Option<G::Program>,
}

impl<G: GraphicsDevicePort> ProgramManager<G> {
    pub fn new(device: G) -> Self {
        Self {
            device,
            active: None,
        }
    }

    #[must_use]
    pub fn has_program(&self) -> bool {
        self.active.is_some()
    }

    pub fn rebuild(&mut self, vertex_source: &str, fragment_source: &str) -> Result<(), BuildError> {
        let build = self.device.build_program(vertex_source, fragment_source)?;

        for diagnostic in &build.diagnostics {
            log::warn!("{} diagnostics: {}", diagnostic.stage, diagnostic.message);
        }

        if let Some(previous) = self.active.replace(build.program) {
            self.device.destroy_program(previous);
        }

        log::debug!("installed a freshly linked fractal program");
        Ok(())
    }

    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<(), ProgramError> {
        match &self.active {
            Some(program) => self
                .device
                .set_uniform(program, name, value)
                .map_err(ProgramError::Uniform),
            None => Err(ProgramError::NoActiveProgram),
        }
    }

    pub fn set_viewport(&mut self, dimensions: Dimensions) {
        self.device.set_viewport(dimensions);
    }

    pub fn draw(&mut self) -> Result<(), ProgramError> {
        match &self.active {
            Some(program) => {
                self.device.draw_quad(program);
                Ok(())
            }
            None => Err(ProgramError::NoActiveProgram),
        }
    }
}

impl<G: GraphicsDevicePort> Drop for ProgramManager<G> {
    fn drop(&mut self) {
        if let Some(program) = self.active.take() {
            self.device.destroy_program(program);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fractal::ports::graphics_device::{
        BuildStage, Diagnostic, ProgramBuild,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct DeviceLog {
        builds: u32,
        destroyed: Vec<u32>,
        draws: Vec<u32>,
    }

    struct MockDevice {
        log: Rc<RefCell<DeviceLog>>,
        fail_next_build: bool,
        diagnostics: Vec<Diagnostic>,
        next_handle: u32,
    }

    impl MockDevice {
        fn new(log: Rc<RefCell<DeviceLog>>) -> Self {
            Self {
                log,
                fail_next_build: false,
                diagnostics: vec![],
                next_handle: 1,
            }
        }
    }

    impl GraphicsDevicePort for MockDevice {
        type Program = u32;

        fn build_program(
            &mut self,
            _vertex_source: &str,
            _fragment_source: &str,
        ) -> Result<ProgramBuild<u32>, BuildError> {
            if self.fail_next_build {
                self.fail_next_build = false;
                return Err(BuildError::Failed {
                    stage: BuildStage::Fragment,
                    log: "mock compile failure".to_string(),
                });
            }

            self.log.borrow_mut().builds += 1;
            let handle = self.next_handle;
            self.next_handle += 1;

            Ok(ProgramBuild {
                program: handle,
                diagnostics: self.diagnostics.clone(),
            })
        }

        fn destroy_program(&mut self, program: u32) {
            self.log.borrow_mut().destroyed.push(program);
        }

        fn set_uniform(
            &mut self,
            _program: &u32,
            _name: &str,
            _value: UniformValue,
        ) -> Result<(), UniformError> {
            Ok(())
        }

        fn set_viewport(&mut self, _dimensions: Dimensions) {}

        fn draw_quad(&mut self, program: &u32) {
            self.log.borrow_mut().draws.push(*program);
        }
    }

    fn manager() -> (ProgramManager<MockDevice>, Rc<RefCell<DeviceLog>>) {
        let log = Rc::new(RefCell::new(DeviceLog::default()));
        (ProgramManager::new(MockDevice::new(Rc::clone(&log))), log)
    }

    #[test]
    fn starts_without_a_program() {
        let (mut manager, _log) = manager();

        assert!(!manager.has_program());
        assert_eq!(manager.draw(), Err(ProgramError::NoActiveProgram));
        assert_eq!(
            manager.set_uniform("zoom", UniformValue::Float(1.0)),
            Err(ProgramError::NoActiveProgram)
        );
    }

    #[test]
    fn rebuild_installs_a_program() {
        let (mut manager, log) = manager();

        manager.rebuild("vs", "fs").unwrap();

        assert!(manager.has_program());
        assert_eq!(log.borrow().builds, 1);
        assert!(log.borrow().destroyed.is_empty());
    }

    #[test]
    fn rebuild_destroys_the_previous_program_only_after_success() {
        let (mut manager, log) = manager();

        manager.rebuild("vs", "fs").unwrap();
        manager.rebuild("vs", "fs").unwrap();

        // first handle released, second active
        assert_eq!(log.borrow().destroyed, vec![1]);
        manager.draw().unwrap();
        assert_eq!(log.borrow().draws, vec![2]);
    }

    #[test]
    fn failed_rebuild_keeps_the_previous_program() {
        let (mut manager, log) = manager();

        manager.rebuild("vs", "fs").unwrap();
        manager.device.fail_next_build = true;

        let result = manager.rebuild("vs", "fs");

        assert_eq!(
            result,
            Err(BuildError::Failed {
                stage: BuildStage::Fragment,
                log: "mock compile failure".to_string(),
            })
        );
        assert!(log.borrow().destroyed.is_empty());
        manager.draw().unwrap();
        assert_eq!(log.borrow().draws, vec![1]);
    }

    #[test]
    fn drop_releases_the_active_program() {
        let (mut manager, log) = manager();
        manager.rebuild("vs", "fs").unwrap();

        drop(manager);

        assert_eq!(log.borrow().destroyed, vec![1]);
    }

    #[test]
    fn drop_without_a_program_releases_nothing() {
        let (manager, log) = manager();

        drop(manager);

        assert!(log.borrow().destroyed.is_empty());
    }
}

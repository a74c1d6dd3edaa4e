//! Shared fakes for probe integration tests.
//!
//! Hand-written rather than mockall-generated so tests can assert on call
//! counts after the run without configuring expectations up front.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::io::{self, Write};

use linkprobe_core::{
    CompressionPort, DatabasePort, DependencyError, DependencyResult, EnumerationHandle,
    LocalLibraryPort, ProbeDependencies, WindowId, WindowListError, WindowListOption,
    WindowServerPort,
};

/// Fixed-value local library.
pub struct FakeLocalLibrary {
    pub foo: i32,
    pub bar: i32,
    pub bar_calls: Cell<usize>,
}

impl FakeLocalLibrary {
    pub const fn new(foo: i32, bar: i32) -> Self {
        Self {
            foo,
            bar,
            bar_calls: Cell::new(0),
        }
    }
}

impl LocalLibraryPort for FakeLocalLibrary {
    fn foo(&self) -> DependencyResult<i32> {
        Ok(self.foo)
    }

    fn bar(&self) -> DependencyResult<i32> {
        self.bar_calls.set(self.bar_calls.get() + 1);
        Ok(self.bar)
    }
}

/// Version-string library; `None` simulates a null return.
pub struct FakeVersion {
    pub call: &'static str,
    pub version: Option<&'static str>,
}

impl FakeVersion {
    fn get(&self) -> DependencyResult<String> {
        self.version
            .map(str::to_string)
            .ok_or(DependencyError::NullPointer { call: self.call })
    }
}

impl CompressionPort for FakeVersion {
    fn version(&self) -> DependencyResult<String> {
        self.get()
    }
}

impl DatabasePort for FakeVersion {
    fn version(&self) -> DependencyResult<String> {
        self.get()
    }
}

/// How the fake window server answers `create_window_list`.
#[derive(Debug, Clone, Copy)]
pub enum Enumeration {
    Windows(usize),
    Null,
    Unsupported,
}

/// Window server that records every acquire, count and release.
pub struct CountingWindowServer {
    pub enumeration: Enumeration,
    pub acquired: Cell<usize>,
    pub counted: Cell<usize>,
    pub released: Cell<usize>,
    pub requests: RefCell<Vec<(WindowListOption, WindowId)>>,
    token: u8,
}

impl CountingWindowServer {
    pub const fn new(enumeration: Enumeration) -> Self {
        Self {
            enumeration,
            acquired: Cell::new(0),
            counted: Cell::new(0),
            released: Cell::new(0),
            requests: RefCell::new(Vec::new()),
            token: 0,
        }
    }

    fn token_ptr(&self) -> *const c_void {
        std::ptr::from_ref(&self.token).cast()
    }
}

impl WindowServerPort for CountingWindowServer {
    fn create_window_list(
        &self,
        option: WindowListOption,
        relative_to: WindowId,
    ) -> Result<EnumerationHandle, WindowListError> {
        self.requests.borrow_mut().push((option, relative_to));
        match self.enumeration {
            Enumeration::Windows(_) => {
                self.acquired.set(self.acquired.get() + 1);
                Ok(EnumerationHandle::from_raw(self.token_ptr()).expect("token is non-null"))
            }
            Enumeration::Null => Err(WindowListError::NullEnumeration),
            Enumeration::Unsupported => Err(WindowListError::Unsupported("test")),
        }
    }

    fn window_count(&self, handle: &EnumerationHandle) -> DependencyResult<usize> {
        assert_eq!(handle.as_ptr(), self.token_ptr(), "count on a foreign handle");
        assert!(self.released.get() < self.acquired.get(), "count after release");
        self.counted.set(self.counted.get() + 1);
        match self.enumeration {
            Enumeration::Windows(n) => Ok(n),
            _ => unreachable!("no handle is handed out for this enumeration"),
        }
    }

    fn release(&self, handle: EnumerationHandle) {
        assert_eq!(handle.as_ptr(), self.token_ptr(), "release of a foreign handle");
        self.released.set(self.released.get() + 1);
    }
}

/// The dependency set from the end-to-end scenario.
pub struct Fixture {
    pub local: FakeLocalLibrary,
    pub zlib: FakeVersion,
    pub sqlite: FakeVersion,
    pub windows: CountingWindowServer,
}

impl Fixture {
    pub const fn new(enumeration: Enumeration) -> Self {
        Self {
            local: FakeLocalLibrary::new(42, 4),
            zlib: FakeVersion {
                call: "zlibVersion",
                version: Some("1.2.11"),
            },
            sqlite: FakeVersion {
                call: "sqlite3_libversion",
                version: Some("3.40.0"),
            },
            windows: CountingWindowServer::new(enumeration),
        }
    }

    pub fn deps(&self) -> ProbeDependencies<'_> {
        ProbeDependencies {
            local: &self.local,
            compression: &self.zlib,
            database: &self.sqlite,
            windows: &self.windows,
        }
    }
}

/// Accepts `limit` lines, then fails every write.
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl FailingWriter {
    pub const fn after_lines(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let lines = self.written.iter().filter(|b| **b == b'\n').count();
        if lines >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

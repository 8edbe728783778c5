/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading the environment variable as a number.
    ///
    /// This method returns `None` if the variable is undefined, not Unicode, or
    /// not a number after trimming white space.
    fn read_number<N: std::str::FromStr>(&self, key: &str) -> Option<N> {
        self.read(key).ok().and_then(|s| s.trim().parse().ok())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_read_number() {
        let mut env = FakeEnv::new();
        env.set("LIMIT", " 8 ").set("BAD", "eight");

        assert_eq!(env.read_number::<usize>("LIMIT"), Some(8));
        assert_eq!(env.read_number::<usize>("BAD"), None);
        assert_eq!(env.read_number::<usize>("MISSING"), None);
        assert_eq!(env.read("MISSING"), Err(std::env::VarError::NotPresent));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;

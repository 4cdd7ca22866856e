/// Output port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` into a self-describing string (algorithm, params, salt).
    fn hash(&self, password: &str) -> anyhow::Result<String>;
}

//! Common interface of the password hashing schemes.
//!
//! Modelled on the Password Hashing Competition API: an output length, the
//! password, a salt and two generic cost knobs. Scheme-specific features
//! (associated data, server relief, ...) live on the concrete types.

use crate::derivation::catena::{Catena, CatenaParams};
use crate::error::{Error, Result};
use crate::hash::{Digest, FastHash};

/// A password hashing scheme driven by a time and a memory cost.
pub trait PasswordHashingScheme {
    /// Name of the scheme instance.
    fn algorithm_name(&self) -> &str;

    /// Hashes `password` with `salt` into `outlen` bytes.
    ///
    /// The meaning of `t_cost` and `m_cost` is scheme specific.
    fn hash(
        &mut self,
        outlen: usize,
        password: &mut [u8],
        salt: &[u8],
        t_cost: u32,
        m_cost: u32,
    ) -> Result<Vec<u8>>;
}

/// `t_cost` is the graph depth λ, `m_cost` the garlic (used as both
/// `min_garlic` and `garlic`).
impl<D: Digest, F: FastHash> PasswordHashingScheme for Catena<D, F> {
    fn algorithm_name(&self) -> &str {
        self.version_id()
    }

    fn hash(
        &mut self,
        outlen: usize,
        password: &mut [u8],
        salt: &[u8],
        t_cost: u32,
        m_cost: u32,
    ) -> Result<Vec<u8>> {
        let lambda = u8::try_from(t_cost)
            .map_err(|_| Error::InvalidArgument("lambda must fit in a byte"))?;
        let garlic = u8::try_from(m_cost)
            .map_err(|_| Error::InvalidArgument("garlic must not exceed 63"))?;

        let params = CatenaParams {
            lambda,
            min_garlic: garlic,
            garlic,
            hashlen: outlen,
        };

        self.hash_password(password, salt, None, &params)
    }
}

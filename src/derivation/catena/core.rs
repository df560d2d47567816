use tracing::{debug, instrument};
use zeroize::{Zeroize, Zeroizing};

use super::boundary::{Tweak, fold, initial_hash};
use super::graph::Topology;
use super::helper::CatenaHelper;
use super::memory::MemoryArray;
use super::params::{CatenaParams, MAX_GARLIC, Mode, Relief, validate_cost};
use crate::error::{Error, Result};
use crate::hash::{Blake2b, Blake2b1, Digest, FastHash};

/// Length of the secret key accepted by keyed hashing.
pub const KEY_LEN: usize = 16;

/// A Catena instance: graph topology, digests and password handling.
///
/// The instance owns its digest and optional fast hash, so operations take
/// `&mut self`. Independent instances share no state and can run on separate
/// threads.
///
/// # Example
///
/// ```rust, ignore
/// use catena::{Catena, CatenaParams};
///
/// let mut catena = Catena::dragonfly();
/// let params = CatenaParams { lambda: 2, min_garlic: 14, garlic: 14, hashlen: 32 };
///
/// let mut password = *b"my_password";
/// let hash = catena.hash_password(&mut password, b"random_salt_16b!", None, &params).unwrap();
/// ```
pub struct Catena<D = Blake2b, F = Blake2b1> {
    digest: D,
    fast_hash: Option<F>,
    topology: Topology,
    wipe_password: bool,
}

impl Catena {
    /// Catena-Dragonfly: Bit-Reversal Graph with Blake2b and Blake2b-1.
    pub fn dragonfly() -> Self {
        Self::reference(Topology::BitReversal, true)
    }

    /// Catena-Dragonfly-Full: Bit-Reversal Graph with Blake2b only.
    pub fn dragonfly_full() -> Self {
        Self::reference(Topology::BitReversal, false)
    }

    /// Catena-Butterfly: Double-Butterfly Graph with Blake2b and Blake2b-1.
    pub fn butterfly() -> Self {
        Self::reference(Topology::DoubleButterfly, true)
    }

    /// Catena-Butterfly-Full: Double-Butterfly Graph with Blake2b only.
    pub fn butterfly_full() -> Self {
        Self::reference(Topology::DoubleButterfly, false)
    }

    fn reference(topology: Topology, fast: bool) -> Self {
        Self {
            digest: Blake2b::new(),
            fast_hash: fast.then(Blake2b1::new),
            topology,
            wipe_password: false,
        }
    }
}

impl<D: Digest, F: FastHash> Catena<D, F> {
    /// Builds an instance from arbitrary primitives.
    ///
    /// Without a fast hash every vertex is computed with the full digest
    /// (the "-Full" variant). The fast hash must produce outputs of the
    /// digest's size.
    pub fn new(topology: Topology, digest: D, fast_hash: Option<F>) -> Result<Self> {
        if let Some(fast_hash) = &fast_hash {
            if fast_hash.output_size() != digest.output_size() {
                return Err(Error::InvalidLength {
                    what: "fast hash output",
                    expected: digest.output_size(),
                    actual: fast_hash.output_size(),
                });
            }
        }

        Ok(Self {
            digest,
            fast_hash,
            topology,
            wipe_password: false,
        })
    }

    /// Zero the caller's password buffer right after the initial hash.
    pub fn with_wipe_password(mut self, wipe: bool) -> Self {
        self.wipe_password = wipe;
        self
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether interior vertices use the round-reduced fast hash.
    pub fn is_fast(&self) -> bool {
        self.fast_hash.is_some()
    }

    pub fn wipe_password(&self) -> bool {
        self.wipe_password
    }

    /// The version identifier `V` of this instance.
    pub fn version_id(&self) -> &'static str {
        self.topology.version_id(self.is_fast())
    }

    /// Digest output size `hLen`, the largest possible hash length.
    pub fn output_size(&self) -> usize {
        self.digest.output_size()
    }

    /// Recommended cost parameters for this instance's topology.
    pub fn default_params(&self) -> CatenaParams {
        self.topology.default_params()
    }

    /// Hashes a password with the topology's default cost.
    ///
    /// The defaults are memory-heavy (192 MiB for Dragonfly with Blake2b).
    pub fn hash_password_default(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        data: Option<&[u8]>,
        hashlen: usize,
    ) -> Result<Vec<u8>> {
        let params = self.default_params().with_hashlen(hashlen);
        self.hash_password(password, salt, data, &params)
    }

    /// Computes a Catena password hash of `params.hashlen` bytes.
    ///
    /// # Arguments
    ///
    /// * `password` - The password; zeroed after the initial hash if password
    ///   wiping is enabled
    /// * `salt` - A random salt (recommended 16+ bytes)
    /// * `data` - Optional associated data bound into the hash
    /// * `params` - Cost parameters and output length
    pub fn hash_password(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        data: Option<&[u8]>,
        params: &CatenaParams,
    ) -> Result<Vec<u8>> {
        self.hash_password_with_public_input(password, salt, None, data, params)
    }

    /// Password hashing with a separate public input for the randomization
    /// layer.
    ///
    /// When the salt must stay secret, `public_input` replaces it inside Γ so
    /// that salt-dependent memory accesses do not leak it through cache
    /// timing; the salt then only enters the initial hash. `None` uses the
    /// salt.
    pub fn hash_password_with_public_input(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        public_input: Option<&[u8]>,
        data: Option<&[u8]>,
        params: &CatenaParams,
    ) -> Result<Vec<u8>> {
        let x = self.catena(
            password,
            salt,
            public_input,
            data,
            params,
            Relief::Regular,
            Mode::PasswordHashing,
        )?;

        Ok(x[..params.hashlen].to_vec())
    }

    /// Client half of server relief.
    ///
    /// Runs the full memory-hard computation but stops before the last
    /// chaining hash, returning the whole `hLen`-byte state. The server
    /// finishes it with [`Catena::catena_server`]. Only sound when the salt is
    /// public.
    pub fn catena_client(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        data: Option<&[u8]>,
        params: &CatenaParams,
    ) -> Result<Vec<u8>> {
        let x = self.catena(
            password,
            salt,
            None,
            data,
            params,
            Relief::Client,
            Mode::PasswordHashing,
        )?;

        Ok(x.to_vec())
    }

    /// Server half of server relief: `H(garlic || x)` truncated to `hashlen`.
    ///
    /// Equals the regular hash for the same password and parameters when `x`
    /// comes from [`Catena::catena_client`].
    #[instrument(skip(self, x))]
    pub fn catena_server(&mut self, garlic: u8, x: &[u8], hashlen: usize) -> Result<Vec<u8>> {
        let h_len = self.output_size();

        if hashlen > h_len {
            return Err(Error::InvalidArgument(
                "hashlen exceeds the digest output size",
            ));
        }

        if x.len() != h_len {
            return Err(Error::InvalidLength {
                what: "client state",
                expected: h_len,
                actual: x.len(),
            });
        }

        let mut z = Zeroizing::new(x.to_vec());
        fold(&mut self.digest, garlic, &mut z);

        Ok(z[..hashlen].to_vec())
    }

    /// Client-independent update: raises the cost of a stored hash without
    /// the password.
    ///
    /// Resumes the escalation loop at `old_garlic + 1` from the stored hash
    /// (zero padded to `hLen`) and continues up to `new_garlic`. For
    /// `hashlen == hLen` the result equals a direct hash at `new_garlic`.
    #[instrument(skip(self, old_hash, salt))]
    pub fn ci_update(
        &mut self,
        old_hash: &[u8],
        lambda: u8,
        salt: &[u8],
        old_garlic: u8,
        new_garlic: u8,
        hashlen: usize,
    ) -> Result<Vec<u8>> {
        let h_len = self.output_size();

        if hashlen > h_len {
            return Err(Error::InvalidArgument(
                "hashlen exceeds the digest output size",
            ));
        }

        if old_hash.len() < hashlen {
            return Err(Error::InvalidLength {
                what: "previous hash",
                expected: hashlen,
                actual: old_hash.len(),
            });
        }

        if old_garlic > new_garlic {
            return Err(Error::InvalidArgument("new_garlic is below old_garlic"));
        }

        validate_cost(lambda, old_garlic, new_garlic)?;
        MemoryArray::byte_len(new_garlic, h_len)?;

        let mut x = Zeroizing::new(vec![0u8; h_len]);
        x[..hashlen].copy_from_slice(&old_hash[..hashlen]);

        for c in (old_garlic + 1)..=new_garlic {
            debug!(garlic = c, "update flap");
            self.flap(&mut x, lambda, c, salt)?;
            fold(&mut self.digest, c, &mut x);
            x[hashlen..].fill(0);
        }

        Ok(x[..hashlen].to_vec())
    }

    /// Derives a key of `keylen` bytes from a password.
    ///
    /// Runs Catena in key-derivation mode to a full `hLen`-byte seed
    /// (`params.hashlen` is ignored) and expands it block by block:
    ///
    /// ```text
    /// K_i = H(0 || LE64(i) || key_id || LE32(keylen) || seed)
    /// ```
    ///
    /// A final partial block is truncated.
    #[allow(clippy::too_many_arguments)]
    pub fn derive_key(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        public_input: Option<&[u8]>,
        data: Option<&[u8]>,
        params: &CatenaParams,
        key_id: u8,
        keylen: usize,
    ) -> Result<Vec<u8>> {
        let h_len = self.output_size();
        let encoded_len = u32::try_from(keylen)
            .map_err(|_| Error::InvalidArgument("key length does not fit in 32 bits"))?;

        let seed_params = params.with_hashlen(h_len);
        let seed = self.catena(
            password,
            salt,
            public_input,
            data,
            &seed_params,
            Relief::Regular,
            Mode::KeyDerivation,
        )?;

        let mut key = vec![0u8; keylen];
        let mut block = Zeroizing::new(vec![0u8; h_len]);

        for (i, chunk) in key.chunks_mut(h_len).enumerate() {
            self.digest.update_byte(0);
            self.digest.update(&(i as u64).to_le_bytes());
            self.digest.update_byte(key_id);
            self.digest.update(&encoded_len.to_le_bytes());
            self.digest.update(&seed);
            self.digest.finalize_into_reset(&mut block);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        Ok(key)
    }

    /// Password hash bound to a 16-byte secret key.
    ///
    /// The regular hash is XORed with the keystream
    /// `H(key || LE64(uuid) || garlic || key)`, where `uuid` identifies the
    /// user so equal passwords hash differently under one key.
    pub fn keyed_hash(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        data: Option<&[u8]>,
        params: &CatenaParams,
        key: &[u8],
        uuid: u64,
    ) -> Result<Vec<u8>> {
        if key.len() != KEY_LEN {
            return Err(Error::InvalidLength {
                what: "key",
                expected: KEY_LEN,
                actual: key.len(),
            });
        }

        let mut chash = self.hash_password(password, salt, data, params)?;

        let mut keystream = Zeroizing::new(vec![0u8; self.output_size()]);
        self.digest.update(key);
        self.digest.update(&uuid.to_le_bytes());
        self.digest.update_byte(params.garlic);
        self.digest.update(key);
        self.digest.finalize_into_reset(&mut keystream);

        chash
            .iter_mut()
            .zip(keystream.iter())
            .for_each(|(c, k)| *c ^= k);

        Ok(chash)
    }

    /// The Catena core: initial hash, warm-up flap and garlic escalation.
    ///
    /// Returns the full `hLen`-byte state: after the final chaining hash for
    /// regular calls, before it for server-relief clients.
    #[instrument(
        skip_all,
        fields(
            version = self.version_id(),
            lambda = params.lambda,
            min_garlic = params.min_garlic,
            garlic = params.garlic,
            hashlen = params.hashlen,
        )
    )]
    #[allow(clippy::too_many_arguments)]
    fn catena(
        &mut self,
        password: &mut [u8],
        salt: &[u8],
        public_input: Option<&[u8]>,
        data: Option<&[u8]>,
        params: &CatenaParams,
        relief: Relief,
        mode: Mode,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let h_len = self.output_size();

        params.validate(h_len)?;
        MemoryArray::byte_len(params.garlic, h_len)?;

        let public_input = public_input.unwrap_or(salt);
        let tweak = Tweak::new(mode, params, salt.len());
        let version_id = self.version_id();

        let mut x = initial_hash(
            &mut self.digest,
            version_id,
            tweak,
            data,
            password,
            salt,
        );

        if self.wipe_password {
            password.zeroize();
        }

        // throw-away flap, only its output state is kept
        let warmup = (params.min_garlic + 1) / 2;
        debug!(garlic = warmup, "warm-up flap");
        self.flap(&mut x, params.lambda, warmup, public_input)?;

        for c in params.min_garlic..=params.garlic {
            debug!(garlic = c, "flap");
            self.flap(&mut x, params.lambda, c, public_input)?;

            if c == params.garlic && relief == Relief::Client {
                return Ok(x);
            }

            fold(&mut self.digest, c, &mut x);
        }

        Ok(x)
    }

    /// One garlic level: memory initialization, Γ, then the graph function.
    ///
    /// Overwrites `x` with the graph output. The memory array lives only for
    /// this call and is wiped when it drops.
    fn flap(&mut self, x: &mut [u8], lambda: u8, garlic: u8, public_input: &[u8]) -> Result<()> {
        debug_assert!(garlic <= MAX_GARLIC);

        let topology = self.topology;
        let h_len = self.output_size();
        let mut r = MemoryArray::allocate(garlic, h_len)?;

        let mut helper = CatenaHelper::new(&mut self.digest, self.fast_hash.as_mut());
        helper.initmem(x, 1usize << garlic, &mut r);
        helper.salt_mix(garlic, public_input, &mut r);
        topology.apply(&mut helper, &mut r, garlic, lambda, x);

        Ok(())
    }
}

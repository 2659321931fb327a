// toypad/src/crypto/prng.rs

//! Small-state generator used to answer CHAL requests.
//!
//! The host only checks that replies are internally consistent, so any
//! deterministic generator works; this is the three-rotate variant of
//! Bob Jenkins' small fast PRNG.

const INIT_A: u32 = 0xF1EA_5EED;
const WARMUP: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Prng {
    pub fn new(seed: u32) -> Self {
        let mut prng = Self {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        };
        prng.init(seed);
        prng
    }

    /// Reseed in place.
    pub fn init(&mut self, seed: u32) {
        self.a = INIT_A;
        self.b = seed;
        self.c = seed;
        self.d = seed;
        for _ in 0..WARMUP {
            self.next_u32();
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let e = self.a.wrapping_sub(self.b.rotate_left(21));
        self.a = self.b ^ self.c.rotate_left(19);
        self.b = self.c.wrapping_add(self.d.rotate_left(6));
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::new(0)
    }
}

use smallvec::SmallVec;

pub type Count = usize;
pub type Index = isize;

const DEFAULT_SMALL_VEC_SIZE: usize = 2;
pub type RVec<T> = SmallVec<[T; DEFAULT_SMALL_VEC_SIZE]>;

mod face_offset;

pub use face_offset::FaceOffset;

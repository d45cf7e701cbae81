// BuildingSync element types
//
// Generated by bsyncgen from the BuildingSync XML schema. Regenerate
// instead of editing by hand.

#![allow(non_camel_case_types)]
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::all)]

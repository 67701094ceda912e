//! Parsing of ontology release data
//!
//! The only format currently handled is the OBO 1.2 flat file. The parser
//! never resolves references between terms; connecting edges to their
//! endpoint nodes is the assembly pass' job.

pub(crate) mod obo;

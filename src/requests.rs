//! Docblocks for `ResolutionPipeline`.
//!
//! Applied top to bottom. Blocks start at `/**`; the indentation already in
//! front of the old comment stays in place.

use crate::rewrite::{ReplacementRequest, Visibility};

/// Rewritten when no `--file` is given, relative to the working directory.
pub const DEFAULT_TARGET: &str = "Foundation/Container/Act/Resolve/ResolutionPipeline.php";

pub const RESOLUTION_PIPELINE: [ReplacementRequest<'static>; 6] = [
    ReplacementRequest {
        name: "__construct",
        visibility: Visibility::Public,
        block: "/**
     * Initialize the default resolution pipeline.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#__construct
     */",
    },
    ReplacementRequest {
        name: "send",
        visibility: Visibility::Public,
        block: "/**
     * Set the resolution context to be processed.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#send
     */",
    },
    ReplacementRequest {
        name: "through",
        visibility: Visibility::Public,
        block: "/**
     * Configure the pipe execution order.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#through
     */",
    },
    ReplacementRequest {
        name: "thenReturn",
        visibility: Visibility::Public,
        block: "/**
     * Execute the configured pipeline and return the result.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#thenReturn
     */",
    },
    ReplacementRequest {
        name: "carry",
        visibility: Visibility::Private,
        block: "/**
     * Build the pipeline execution chain.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#carry
     */",
    },
    ReplacementRequest {
        name: "getPipeInstance",
        visibility: Visibility::Private,
        block: "/**
     * Resolve a pipe class name to its instance.
     *
     * @see docs/classes/Resolve/ResolutionPipeline.html#getPipeInstance
     */",
    },
];

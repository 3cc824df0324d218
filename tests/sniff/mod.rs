mod fastpath;
mod outcomes;

use copy_semantics::demo;
use copy_semantics::Trace;

fn main() {
    demo::run(&Trace::stdout());
}

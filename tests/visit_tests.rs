use valtree::{
    BoolValue, IntValue, SeqValue, StringValue, StructValue, Tag, Value, ValueVisitor,
};

/// Records which visitor methods ran, without recursing.
#[derive(Default)]
struct Recorder {
    calls: Vec<Tag>,
}

impl ValueVisitor for Recorder {
    type Output = ();

    fn visit_bool(&mut self, _: &BoolValue) {
        self.calls.push(Tag::Bool);
    }

    fn visit_int(&mut self, _: &IntValue) {
        self.calls.push(Tag::Int);
    }

    fn visit_string(&mut self, _: &StringValue) {
        self.calls.push(Tag::String);
    }

    fn visit_seq(&mut self, _: &SeqValue) {
        self.calls.push(Tag::Seq);
    }

    fn visit_struct(&mut self, _: &StructValue) {
        self.calls.push(Tag::Struct);
    }
}

/// Computes the nesting depth of a tree.
struct Depth;

impl ValueVisitor for Depth {
    type Output = usize;

    fn visit_bool(&mut self, _: &BoolValue) -> usize {
        1
    }

    fn visit_int(&mut self, _: &IntValue) -> usize {
        1
    }

    fn visit_string(&mut self, _: &StringValue) -> usize {
        1
    }

    fn visit_seq(&mut self, value: &SeqValue) -> usize {
        1 + value.iter().map(|child| child.accept(self)).max().unwrap_or(0)
    }

    fn visit_struct(&mut self, value: &StructValue) -> usize {
        1 + value.values().map(|child| child.accept(self)).max().unwrap_or(0)
    }
}

/// Flattens leaves to strings in traversal order.
#[derive(Default)]
struct Leaves {
    out: Vec<String>,
}

impl ValueVisitor for Leaves {
    type Output = ();

    fn visit_bool(&mut self, value: &BoolValue) {
        self.out.push(value.get().to_string());
    }

    fn visit_int(&mut self, value: &IntValue) {
        self.out.push(value.get().to_string());
    }

    fn visit_string(&mut self, value: &StringValue) {
        self.out.push(value.as_str().to_owned());
    }

    fn visit_seq(&mut self, value: &SeqValue) {
        for child in value {
            child.accept(self);
        }
    }

    fn visit_struct(&mut self, value: &StructValue) {
        for (key, child) in value {
            self.out.push(format!("{key}="));
            child.accept(self);
        }
    }
}

fn sample() -> Value {
    let mut seq = SeqValue::new();
    seq.push_back(false);
    seq.push_back("Hello");

    let mut record = StructValue::new();
    record.insert("val", 42);
    record.insert("seq", seq);
    Value::from(record)
}

#[test]
fn test_accept_dispatches_exactly_once_per_variant() {
    let values = [
        Value::from(true),
        Value::from(1),
        Value::from("s"),
        Value::from(SeqValue::from_iter([1, 2])),
        sample(),
    ];
    for value in &values {
        let mut recorder = Recorder::default();
        value.accept(&mut recorder);
        assert_eq!(recorder.calls, [value.tag()]);
    }
}

#[test]
fn test_accept_does_not_recurse_by_itself() {
    let mut recorder = Recorder::default();
    sample().accept(&mut recorder);
    assert_eq!(recorder.calls, [Tag::Struct]);
}

#[test]
fn test_concrete_accept_matches_value_accept() {
    let mut recorder = Recorder::default();
    BoolValue::new(true).accept(&mut recorder);
    IntValue::new(1).accept(&mut recorder);
    StringValue::new("x").accept(&mut recorder);
    SeqValue::new().accept(&mut recorder);
    StructValue::new().accept(&mut recorder);
    assert_eq!(
        recorder.calls,
        [Tag::Bool, Tag::Int, Tag::String, Tag::Seq, Tag::Struct]
    );
}

#[test]
fn test_recursive_visitor() {
    assert_eq!(Value::from(1).accept(&mut Depth), 1);
    assert_eq!(Value::from(SeqValue::new()).accept(&mut Depth), 1);
    assert_eq!(sample().accept(&mut Depth), 3);
}

#[test]
fn test_traversal_order() {
    let mut leaves = Leaves::default();
    sample().accept(&mut leaves);
    assert_eq!(leaves.out, ["seq=", "false", "Hello", "val=", "42"]);
}

#[test]
fn test_visitor_through_mut_reference() {
    let mut recorder = Recorder::default();
    {
        let mut by_ref = &mut recorder;
        Value::from(5).accept(&mut by_ref);
    }
    assert_eq!(recorder.calls, [Tag::Int]);
}

#[test]
fn test_visitor_as_trait_object() {
    let mut recorder = Recorder::default();
    let visitor: &mut dyn ValueVisitor<Output = ()> = &mut recorder;
    sample().accept(visitor);
    Value::from("x").accept(visitor);
    assert_eq!(recorder.calls, [Tag::Struct, Tag::String]);
}

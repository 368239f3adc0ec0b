use std::ops::Index;

/// Flat gene vector an individual is rebuilt from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chromosome {
    genes: Vec<f32>,
}

impl Chromosome {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.genes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.genes.iter_mut()
    }
}

impl Index<usize> for Chromosome {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl FromIterator<f32> for Chromosome {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Chromosome {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromosome() -> Chromosome {
        vec![3.0, 1.0, 2.0].into_iter().collect()
    }

    #[test]
    fn test_len_and_index() {
        let chromosome = chromosome();
        assert_eq!(chromosome.len(), 3);
        assert!(!chromosome.is_empty());
        assert_eq!(chromosome[0], 3.0);
        assert_eq!(chromosome[2], 2.0);
    }

    #[test]
    fn test_iter_mut() {
        let mut chromosome = chromosome();
        chromosome.iter_mut().for_each(|gene| *gene *= 10.0);

        let genes: Vec<f32> = chromosome.into_iter().collect();
        assert_eq!(genes, vec![30.0, 10.0, 20.0]);
    }
}
